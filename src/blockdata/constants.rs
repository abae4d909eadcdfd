// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines how the genesis block and its
//! single transaction are built.
//!

use hashes::hex::FromHex;

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::opcodes;
use crate::blockdata::script::{self, Script};
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::chainparams::IntegrityError;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// How many base units are in one coin
pub const COIN_VALUE: u64 = 100_000_000;

/// The text embedded in the coinbase input of every network's genesis block.
pub const GENESIS_TIMESTAMP: &str = "2014-02-23 FT - G20 aims to add $2tn to global economy";

/// Uncompressed public key paid by the genesis coinbase output.
pub const GENESIS_OUTPUT_KEY: &str = "04e941763c7750969e751bee1ffbe96a651a0feb131db046546c219ea40bff40b95077dc9ba1c05af991588772d8daabbda57386c068fb9bc7477c5e28702d5eb9";

/// Builds a genesis block from literal inputs.
///
/// The coinbase input carries `timestamp` in place of a real previous
/// output, and its single output pays `reward` to `output_script`. The
/// output of a genesis coinbase can never be spent since it never entered
/// the UTXO set.
pub fn create_genesis_block(
    timestamp: &[u8],
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Block {
    let in_script = script::Builder::new()
        .push_int(486604799)
        .push_scriptint(4)
        .push_slice(timestamp)
        .into_script();

    let tx = Transaction {
        version: 1,
        lock_time: 0,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: in_script,
            sequence: MAX_SEQUENCE,
        }],
        output: vec![TxOut { value: reward, script_pubkey: output_script }],
    };

    let merkle_root = tx.txid().as_hash().into();
    Block {
        header: BlockHeader {
            version,
            prev_blockhash: Default::default(),
            merkle_root,
            time,
            bits,
            nonce,
        },
        txdata: vec![tx],
    }
}

/// The pay-to-pubkey script of the genesis coinbase output.
pub fn genesis_output_script() -> Result<Script, IntegrityError> {
    let bytes = Vec::<u8>::from_hex(GENESIS_OUTPUT_KEY)?;
    let key = secp256k1::PublicKey::from_slice(&bytes)?;
    Ok(script::Builder::new()
        .push_slice(&key.serialize_uncompressed())
        .push_opcode(opcodes::all::OP_CHECKSIG)
        .into_script())
}

/// Builds the chain's genesis block with the shared timestamp text and
/// reward script; only the header fields and reward differ per network.
pub fn genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Result<Block, IntegrityError> {
    Ok(create_genesis_block(
        GENESIS_TIMESTAMP.as_bytes(),
        genesis_output_script()?,
        time,
        nonce,
        bits,
        version,
        reward,
    ))
}

#[cfg(test)]
mod test {
    use hex::decode as hex_decode;

    use super::*;
    use crate::consensus::encode::serialize;

    fn mainnet_genesis() -> Block {
        genesis_block(1393164995, 2092903596, 0x1e0fffff, 2, 1000 * COIN_VALUE).unwrap()
    }

    #[test]
    fn genesis_first_transaction() {
        let gen = mainnet_genesis();
        let tx = &gen.txdata[0];

        assert_eq!(tx.version, 1);
        assert!(tx.is_coin_base());
        assert_eq!(tx.input.len(), 1);
        assert_eq!(tx.input[0].previous_output, OutPoint::null());
        assert_eq!(
            tx.input[0].script_sig.as_bytes(),
            &hex_decode("04ffff001d010436323031342d30322d3233204654202d204732302061696d7320746f20616464202432746e20746f20676c6f62616c2065636f6e6f6d79").unwrap()[..]
        );
        assert_eq!(tx.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(tx.output.len(), 1);
        assert_eq!(
            serialize(&tx.output[0].script_pubkey),
            hex_decode(&format!("4341{}ac", GENESIS_OUTPUT_KEY)).unwrap()
        );
        assert_eq!(tx.output[0].value, 1000 * COIN_VALUE);
        assert_eq!(tx.lock_time, 0);

        assert_eq!(
            tx.txid().to_string(),
            "3f75db3c18e92f46c21530dc1222e1fddf4ccebbf88e289a6c9dc787fd6469da"
        );
    }

    #[test]
    fn genesis_full_block() {
        let gen = mainnet_genesis();

        assert_eq!(gen.header.version, 2);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(
            gen.header.merkle_root.to_string(),
            "3f75db3c18e92f46c21530dc1222e1fddf4ccebbf88e289a6c9dc787fd6469da"
        );
        assert!(gen.check_merkle_root());
        assert_eq!(gen.header.time, 1393164995);
        assert_eq!(gen.header.bits, 0x1e0fffff);
        assert_eq!(gen.header.nonce, 2092903596);
        assert_eq!(
            gen.block_hash().to_string(),
            "00000ffde4c020b5938441a0ea3d314bf619eff0b38f32f78f7583cffa1ea485"
        );
    }

    #[test]
    fn genesis_is_deterministic() {
        assert_eq!(mainnet_genesis(), mainnet_genesis());
    }

    #[test]
    fn genesis_hash_depends_on_every_input() {
        let base = mainnet_genesis().block_hash();
        let reward = 1000 * COIN_VALUE;
        let variants = vec![
            genesis_block(1393164996, 2092903596, 0x1e0fffff, 2, reward).unwrap(),
            genesis_block(1393164995, 2092903597, 0x1e0fffff, 2, reward).unwrap(),
            genesis_block(1393164995, 2092903596, 0x1e0ffffe, 2, reward).unwrap(),
            genesis_block(1393164995, 2092903596, 0x1e0fffff, 1, reward).unwrap(),
            genesis_block(1393164995, 2092903596, 0x1e0fffff, 2, reward + 1).unwrap(),
            create_genesis_block(
                b"2014-02-23 FT - G20 aims to add $2tn to global economy!",
                genesis_output_script().unwrap(),
                1393164995,
                2092903596,
                0x1e0fffff,
                2,
                reward,
            ),
        ];
        for block in variants {
            assert_ne!(block.block_hash(), base);
        }
    }
}
