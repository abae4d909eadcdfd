// SPDX-License-Identifier: CC0-1.0

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. The header
//! hash is always double-SHA256 regardless of which mining algorithm
//! produced the proof-of-work.
//!

use std::io;

use hashes::{sha256d, Hash};

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{serialize, Encodable};
use crate::hash_types::{BlockHash, TxMerkleNode};

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug, PartialOrd, Ord, Hash)]
pub struct BlockHeader {
    /// The block version; also carries the mining algorithm and version bits
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}

impl BlockHeader {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::hash(&serialize(self))
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut w)?;
        len += self.prev_blockhash.consensus_encode(&mut w)?;
        len += self.merkle_root.consensus_encode(&mut w)?;
        len += self.time.consensus_encode(&mut w)?;
        len += self.bits.consensus_encode(&mut w)?;
        len += self.nonce.consensus_encode(w)?;
        Ok(len)
    }
}

/// A block: a header plus the list of transactions it commits to.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Checks if merkle root of header matches merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }

    /// Calculates the transaction merkle root, `None` for a block without
    /// transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|tx| tx.txid().as_hash());
        bitcoin_merkle_root(hashes).map(|h| h.into())
    }
}

impl Encodable for Block {
    fn consensus_encode<W: io::Write>(&self, mut w: W) -> Result<usize, io::Error> {
        let len = self.header.consensus_encode(&mut w)?;
        Ok(len + self.txdata.consensus_encode(w)?)
    }
}

/// Calculates the merkle root of a list of hashes.
///
/// Odd levels duplicate their last element; a single hash is its own root.
pub fn bitcoin_merkle_root<I>(hashes: I) -> Option<sha256d::Hash>
where
    I: Iterator<Item = sha256d::Hash>,
{
    let mut level: Vec<sha256d::Hash> = hashes.collect();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = level
            .chunks(2)
            .map(|pair| {
                let mut buf = [0u8; 64];
                buf[..32].copy_from_slice(&pair[0][..]);
                buf[32..].copy_from_slice(&pair[1][..]);
                sha256d::Hash::hash(&buf)
            })
            .collect();
    }
    Some(level[0])
}
