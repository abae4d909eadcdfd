// SPDX-License-Identifier: CC0-1.0

//! Hash types
//!
//! Newtypes over double-SHA256 so that transaction ids, block hashes and
//! merkle nodes cannot be mixed up even though they share a format.

use std::io;

use hashes::{sha256d, Hash};

use crate::consensus::encode::Encodable;

macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl Encodable for $hashtype {
            fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
                let inner = self.into_inner();
                w.write_all(&inner[..])?;
                Ok(inner.len())
            }
        }
    };
}

hash_newtype!(Txid, sha256d::Hash, 32, doc="A transaction hash/transaction ID.");
hash_newtype!(BlockHash, sha256d::Hash, 32, doc="A block hash.");
hash_newtype!(TxMerkleNode, sha256d::Hash, 32, doc="A hash of the Merkle tree branch or root for transactions.");

impl_hashencode!(Txid);
impl_hashencode!(BlockHash);
impl_hashencode!(TxMerkleNode);
