// SPDX-License-Identifier: CC0-1.0

//! Big unsigned integer type
//!
//! A fixed 256-bit unsigned integer, stored big-endian, for the
//! proof-of-work limit and minimum chain work constants.
//!

use std::fmt;

use hashes::hex::{self, FromHex};

/// A 256-bit unsigned integer stored as 32 big-endian bytes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// The value zero.
    pub const ZERO: Uint256 = Uint256([0; 32]);

    /// The largest representable value, all bits set.
    pub const MAX: Uint256 = Uint256([0xff; 32]);

    /// Creates a value from its big-endian byte representation.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Uint256 {
        Uint256(bytes)
    }

    /// Returns the big-endian byte representation.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// `~0 >> shift`: the all-ones value with its `shift` top bits cleared.
    pub fn max_shr(shift: u32) -> Uint256 {
        let mut ret = [0u8; 32];
        for (i, byte) in ret.iter_mut().enumerate() {
            let first_bit = i as u32 * 8;
            *byte = if shift >= first_bit + 8 {
                0
            } else if shift <= first_bit {
                0xff
            } else {
                0xff >> (shift - first_bit)
            };
        }
        Uint256(ret)
    }

    /// Parses a hex string, optionally `0x`-prefixed, of at most 64 digits.
    ///
    /// Shorter strings are the low-order digits, so `"0x00"` is zero.
    pub fn from_hex(s: &str) -> Result<Uint256, hex::Error> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() > 64 {
            return Err(hex::Error::InvalidLength(64, digits.len()));
        }
        let padded = format!("{:0>64}", digits);
        let bytes = Vec::<u8>::from_hex(&padded)?;
        let mut ret = [0u8; 32];
        ret.copy_from_slice(&bytes);
        Ok(Uint256(ret))
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns the least number of bits needed to represent the number.
    pub fn bits(&self) -> usize {
        match self.0.iter().position(|&b| b != 0) {
            Some(i) => (32 - i) * 8 - self.0[i].leading_zeros() as usize,
            None => 0,
        }
    }

    /// Encodes the value in the compact "nBits" form used in block headers.
    ///
    /// Low-order bits that do not fit the 23-bit mantissa are dropped.
    pub fn to_compact(&self) -> u32 {
        let mut size = (self.bits() + 7) / 8;
        let mut compact = 0u32;
        for k in 0..3 {
            compact <<= 8;
            if size > k {
                compact |= self.0[32 - size + k] as u32;
            }
        }
        // The mantissa is signed, keep the sign bit clear.
        if compact & 0x00800000 != 0 {
            compact >>= 8;
            size += 1;
        }
        compact | (size as u32) << 24
    }
}

impl fmt::LowerHex for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_shr_test() {
        assert_eq!(Uint256::max_shr(0), Uint256::MAX);
        assert_eq!(Uint256::max_shr(256), Uint256::ZERO);
        assert_eq!(
            Uint256::max_shr(20).to_string(),
            "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        assert_eq!(
            Uint256::max_shr(1).to_string(),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn from_hex_test() {
        assert_eq!(Uint256::from_hex("0x00").unwrap(), Uint256::ZERO);
        assert!(Uint256::from_hex("0x00").unwrap().is_zero());
        assert_eq!(
            Uint256::from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")
                .unwrap(),
            Uint256::max_shr(1)
        );
        let work = Uint256::from_hex("0x0ce40000000000000000000000000000000000000000167e92f47c43f03e9eb4")
            .unwrap();
        assert_eq!(work.to_be_bytes()[0], 0x0c);
        assert_eq!(work.to_be_bytes()[31], 0xb4);
        assert_eq!(
            Uint256::from_hex("0x123").unwrap().to_be_bytes()[30..],
            [0x01, 0x23]
        );
        assert!(Uint256::from_hex("zz").is_err());
        assert!(Uint256::from_hex(&"f".repeat(65)).is_err());
    }

    #[test]
    fn bits_test() {
        assert_eq!(Uint256::ZERO.bits(), 0);
        assert_eq!(Uint256::from_hex("0x01").unwrap().bits(), 1);
        assert_eq!(Uint256::from_hex("0x0100").unwrap().bits(), 9);
        assert_eq!(Uint256::max_shr(20).bits(), 236);
        assert_eq!(Uint256::MAX.bits(), 256);
    }

    #[test]
    fn compact_test() {
        assert_eq!(Uint256::max_shr(20).to_compact(), 0x1e0fffff);
        assert_eq!(Uint256::max_shr(16).to_compact(), 0x1f00ffff);
        assert_eq!(Uint256::max_shr(1).to_compact(), 0x207fffff);
        assert_eq!(Uint256::from_hex("0x12").unwrap().to_compact(), 0x01120000);
        assert_eq!(Uint256::from_hex("0x80").unwrap().to_compact(), 0x02008000);
        assert_eq!(Uint256::ZERO.to_compact(), 0);
    }
}
