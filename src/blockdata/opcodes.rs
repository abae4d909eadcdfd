// SPDX-License-Identifier: CC0-1.0

//! Opcodes
//!
//! The subset of script opcodes needed to build coinbase and reward
//! scripts.
//!

use std::fmt;

/// A script opcode.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct All {
    code: u8,
}

impl All {
    /// Encodes the opcode as a byte.
    #[inline]
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for All {
    #[inline]
    fn from(b: u8) -> All {
        All { code: b }
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OP_")?;
        match *self {
            all::OP_PUSHBYTES_0 => write!(f, "PUSHBYTES_0"),
            all::OP_PUSHDATA1 => write!(f, "PUSHDATA1"),
            all::OP_PUSHDATA2 => write!(f, "PUSHDATA2"),
            all::OP_PUSHDATA4 => write!(f, "PUSHDATA4"),
            all::OP_PUSHNUM_NEG1 => write!(f, "PUSHNUM_NEG1"),
            All { code: x } if x >= all::OP_PUSHNUM_1.code && x <= all::OP_PUSHNUM_16.code => {
                write!(f, "PUSHNUM_{}", x - all::OP_PUSHNUM_1.code + 1)
            }
            all::OP_DUP => write!(f, "DUP"),
            all::OP_EQUALVERIFY => write!(f, "EQUALVERIFY"),
            all::OP_HASH160 => write!(f, "HASH160"),
            all::OP_CHECKSIG => write!(f, "CHECKSIG"),
            All { code: x } => write!(f, "UNKNOWN_{:#04x}", x),
        }
    }
}

/// Opcode constants.
pub mod all {
    use super::All;

    /// Push an empty array onto the stack.
    pub const OP_PUSHBYTES_0: All = All { code: 0x00 };
    /// Read the next byte as N; push the next N bytes as an array onto the stack.
    pub const OP_PUSHDATA1: All = All { code: 0x4c };
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack.
    pub const OP_PUSHDATA2: All = All { code: 0x4d };
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack.
    pub const OP_PUSHDATA4: All = All { code: 0x4e };
    /// Push the array `0x81` onto the stack.
    pub const OP_PUSHNUM_NEG1: All = All { code: 0x4f };
    /// Push the array `0x01` onto the stack.
    pub const OP_PUSHNUM_1: All = All { code: 0x51 };
    /// Push the array `0x10` onto the stack.
    pub const OP_PUSHNUM_16: All = All { code: 0x60 };
    /// Duplicate the top stack item.
    pub const OP_DUP: All = All { code: 0x76 };
    /// Fail the script unless the top two stack items are equal.
    pub const OP_EQUALVERIFY: All = All { code: 0x88 };
    /// RIPEMD160(SHA256) the top stack item.
    pub const OP_HASH160: All = All { code: 0xa9 };
    /// Pop a public key and signature and push whether the signature is valid.
    pub const OP_CHECKSIG: All = All { code: 0xac };
}
