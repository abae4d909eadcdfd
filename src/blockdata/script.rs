// SPDX-License-Identifier: CC0-1.0

//! Script
//!
//! Scripts are stored as raw bytes; this module only knows how to build
//! them, not how to execute them.
//!

use std::{fmt, io};

use crate::blockdata::opcodes;
use crate::consensus::encode::Encodable;

/// A script, the raw bytes of a scriptSig or scriptPubKey.
#[derive(Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Script(Box<[u8]>);

impl Script {
    /// Creates a new empty script.
    pub fn new() -> Script {
        Script(vec![].into_boxed_slice())
    }

    /// The length in bytes of the script.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the script data.
    pub fn as_bytes(&self) -> &[u8] {
        &*self.0
    }

    /// Converts the script into a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone().into_vec()
    }
}

impl From<Vec<u8>> for Script {
    fn from(v: Vec<u8>) -> Script {
        Script(v.into_boxed_slice())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Script(")?;
        fmt::LowerHex::fmt(self, f)?;
        f.write_str(")")
    }
}

impl fmt::LowerHex for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

impl Encodable for Script {
    #[inline]
    fn consensus_encode<W: io::Write>(&self, w: W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

/// Helper to encode an integer in script format.
pub fn build_scriptint(n: i64) -> Vec<u8> {
    if n == 0 {
        return vec![];
    }

    let neg = n < 0;

    let mut abs = n.unsigned_abs();
    let mut v = vec![];
    while abs > 0xFF {
        v.push((abs & 0xFF) as u8);
        abs >>= 8;
    }
    // If the number's value causes the sign bit to be set, we need an extra
    // byte to get the correct value and correct sign bit
    if abs & 0x80 != 0 {
        v.push(abs as u8);
        v.push(if neg { 0x80u8 } else { 0u8 });
    }
    // Otherwise we just set the sign bit ourselves
    else {
        abs |= if neg { 0x80 } else { 0 };
        v.push(abs as u8);
    }
    v
}

/// An object which can be used to construct a script piece by piece.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script.
    pub fn new() -> Self {
        Builder(vec![])
    }

    /// Adds instructions to push an integer onto the stack, using the
    /// single-byte opcodes for -1 and 0..=16.
    pub fn push_int(self, data: i64) -> Builder {
        if data == -1 || (1..=16).contains(&data) {
            let opcode = opcodes::All::from(
                (data - 1 + opcodes::all::OP_PUSHNUM_1.into_u8() as i64) as u8,
            );
            self.push_opcode(opcode)
        } else if data == 0 {
            self.push_opcode(opcodes::all::OP_PUSHBYTES_0)
        } else {
            self.push_scriptint(data)
        }
    }

    /// Adds instructions to push an integer onto the stack as a minimally
    /// encoded data push, never as a small-number opcode.
    pub fn push_scriptint(self, data: i64) -> Builder {
        self.push_slice(&build_scriptint(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack.
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        match data.len() as u64 {
            n if n < opcodes::all::OP_PUSHDATA1.into_u8() as u64 => {
                self.0.push(n as u8);
            }
            n if n < 0x100 => {
                self.0.push(opcodes::all::OP_PUSHDATA1.into_u8());
                self.0.push(n as u8);
            }
            n if n < 0x10000 => {
                self.0.push(opcodes::all::OP_PUSHDATA2.into_u8());
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n if n < 0x100000000 => {
                self.0.push(opcodes::all::OP_PUSHDATA4.into_u8());
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Adds a single opcode to the script.
    pub fn push_opcode(mut self, data: opcodes::All) -> Builder {
        self.0.push(data.into_u8());
        self
    }

    /// Converts the `Builder` into an unmodifiable `Script`.
    pub fn into_script(self) -> Script {
        Script(self.0.into_boxed_slice())
    }
}
