// SPDX-License-Identifier: CC0-1.0

//! Consensus-encodable types
//!
//! Anything whose hash must agree between every node on the network is
//! encoded with the [`Encodable`] trait: integers are little-endian,
//! variable-length data is prefixed with a compact-size [`VarInt`].
//!

use std::io;

/// Data which can be encoded in a consensus-consistent way.
pub trait Encodable {
    /// Encodes an object with a well-defined format.
    ///
    /// Returns the number of bytes written on success.
    fn consensus_encode<W: io::Write>(&self, writer: W) -> Result<usize, io::Error>;
}

/// Encodes an object into a vector.
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut encoder = Vec::new();
    let len = data.consensus_encode(&mut encoder).expect("in-memory writers don't error");
    debug_assert_eq!(len, encoder.len());
    encoder
}

/// A variable-length unsigned integer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Gets the length of this VarInt when encoded.
    ///
    /// Returns 1 for 0..=0xFC, 3 for 0xFD..=(2^16-1), 5 for 0x10000..=(2^32-1),
    /// and 9 otherwise.
    #[inline]
    pub fn len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

impl Encodable for VarInt {
    #[inline]
    fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
        match self.0 {
            0..=0xFC => {
                (self.0 as u8).consensus_encode(w)?;
                Ok(1)
            }
            0xFD..=0xFFFF => {
                w.write_all(&[0xFD])?;
                (self.0 as u16).consensus_encode(w)?;
                Ok(3)
            }
            0x10000..=0xFFFFFFFF => {
                w.write_all(&[0xFE])?;
                (self.0 as u32).consensus_encode(w)?;
                Ok(5)
            }
            _ => {
                w.write_all(&[0xFF])?;
                self.0.consensus_encode(w)?;
                Ok(9)
            }
        }
    }
}

macro_rules! impl_int_encodable {
    ($ty:ident) => {
        impl Encodable for $ty {
            #[inline]
            fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
                let bytes = self.to_le_bytes();
                w.write_all(&bytes)?;
                Ok(bytes.len())
            }
        }
    };
}

impl_int_encodable!(u8);
impl_int_encodable!(u16);
impl_int_encodable!(u32);
impl_int_encodable!(u64);
impl_int_encodable!(i32);
impl_int_encodable!(i64);

impl Encodable for [u8] {
    #[inline]
    fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
        let vi_len = VarInt(self.len() as u64).consensus_encode(&mut w)?;
        w.write_all(self)?;
        Ok(vi_len + self.len())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
        let mut len = VarInt(self.len() as u64).consensus_encode(&mut w)?;
        for item in self.iter() {
            len += item.consensus_encode(&mut w)?;
        }
        Ok(len)
    }
}
