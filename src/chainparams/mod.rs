// SPDX-License-Identifier: CC0-1.0

//! Chain parameters
//!
//! A [`ChainParams`] bundles everything that distinguishes one network from
//! another: its consensus table, its verified genesis block, the wire magic
//! and port peers use to recognise each other, address prefixes, seeds and
//! checkpoints. Profiles are built once at startup and are read-only from
//! then on.
//!
//! # Example: building a profile
//!
//! ```rust
//! use chainparams::chainparams::{create_chain_params, ChainArgs};
//!
//! let params = create_chain_params("main", &ChainArgs::default()).unwrap();
//! assert_eq!(params.default_port, 10888);
//! assert_eq!(
//!     params.genesis.block_hash().to_string(),
//!     "00000ffde4c020b5938441a0ea3d314bf619eff0b38f32f78f7583cffa1ea485"
//! );
//! ```

use std::{error, fmt};

use hashes::hex::{self, FromHex};

use crate::blockdata::block::Block;
use crate::blockdata::constants::{genesis_block, COIN_VALUE};
use crate::consensus::params::Params;
use crate::consensus::vbparams;
use crate::error::Error;
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::Network;

mod args;
mod registry;

pub use self::args::ChainArgs;
pub use self::registry::ParamsRegistry;

/// A fault in the compiled-in constants themselves. None of these can be
/// caused by user input, and a node must not start with them present.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityError {
    /// The genesis block does not hash to the recorded value.
    GenesisHash {
        /// Network being built.
        network: Network,
        /// Recorded hash.
        expected: BlockHash,
        /// Hash of the block actually built.
        computed: BlockHash,
    },
    /// The genesis merkle root does not match the recorded value.
    MerkleRoot {
        /// Network being built.
        network: Network,
        /// Recorded merkle root.
        expected: TxMerkleNode,
        /// Merkle root of the block actually built.
        computed: TxMerkleNode,
    },
    /// Checkpoint heights are not strictly increasing.
    CheckpointOrder {
        /// Network being built.
        network: Network,
        /// First height that does not exceed its predecessor.
        height: u32,
    },
    /// A hex literal could not be parsed.
    Literal(hex::Error),
    /// The genesis reward key is not a valid public key.
    GenesisKey(secp256k1::Error),
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IntegrityError::GenesisHash { network, ref expected, ref computed } => write!(
                f,
                "{} genesis block hash mismatch: expected {}, computed {}",
                network, expected, computed
            ),
            IntegrityError::MerkleRoot { network, ref expected, ref computed } => write!(
                f,
                "{} genesis merkle root mismatch: expected {}, computed {}",
                network, expected, computed
            ),
            IntegrityError::CheckpointOrder { network, height } => {
                write!(f, "{} checkpoint at height {} is out of order", network, height)
            }
            IntegrityError::Literal(ref e) => write!(f, "invalid hex literal: {:?}", e),
            IntegrityError::GenesisKey(ref e) => write!(f, "invalid genesis output key: {}", e),
        }
    }
}

impl error::Error for IntegrityError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            IntegrityError::GenesisKey(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<hex::Error> for IntegrityError {
    fn from(e: hex::Error) -> IntegrityError {
        IntegrityError::Literal(e)
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for IntegrityError {
    fn from(e: secp256k1::Error) -> IntegrityError {
        IntegrityError::GenesisKey(e)
    }
}

/// Version prefixes for base58 encoded keys and addresses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address version.
    pub pubkey_address: u8,
    /// Pay-to-script-hash address version.
    pub script_address: u8,
    /// WIF private key version.
    pub secret_key: u8,
    /// BIP32 extended public key version.
    pub ext_public_key: [u8; 4],
    /// BIP32 extended private key version.
    pub ext_secret_key: [u8; 4],
}

/// A known-good block hash at a given height.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Checkpoint {
    /// Block height.
    pub height: u32,
    /// Hash of the block at `height`.
    pub hash: BlockHash,
}

/// Checkpoints ordered by strictly increasing height.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Checkpoints(Vec<Checkpoint>);

impl Checkpoints {
    fn parse(network: Network, literals: &[(u32, &str)]) -> Result<Checkpoints, IntegrityError> {
        let mut checkpoints = Vec::with_capacity(literals.len());
        for &(height, hash) in literals {
            if let Some(prev) = checkpoints.last().map(|c: &Checkpoint| c.height) {
                if height <= prev {
                    return Err(IntegrityError::CheckpointOrder { network, height });
                }
            }
            checkpoints.push(Checkpoint { height, hash: BlockHash::from_hex(hash)? });
        }
        Ok(Checkpoints(checkpoints))
    }

    /// The checkpointed hash at `height`, if there is one.
    pub fn hash_at(&self, height: u32) -> Option<&BlockHash> {
        self.0
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|i| &self.0[i].hash)
    }

    /// The highest checkpoint.
    pub fn last(&self) -> Option<&Checkpoint> {
        self.0.last()
    }

    /// Iterates over the checkpoints in height order.
    pub fn iter(&self) -> std::slice::Iter<Checkpoint> {
        self.0.iter()
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Transaction statistics as of a recent block, used to estimate
/// verification progress.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known number of transactions.
    pub time: i64,
    /// Total number of transactions between genesis and that timestamp.
    pub tx_count: u64,
    /// Estimated number of transactions per second after that timestamp.
    pub tx_rate: f64,
}

/// A fixed peer address used when DNS seeding fails.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FixedSeed {
    /// IPv6 (or IPv4-mapped) address.
    pub addr: [u8; 16],
    /// TCP port.
    pub port: u16,
}

/// Every parameter of one network, fully built and verified.
#[derive(Clone, PartialEq, Debug)]
pub struct ChainParams {
    /// The network these parameters describe.
    pub network: Network,
    /// Consensus rules, with `hash_genesis_block` filled in.
    pub consensus: Params,
    /// The genesis block.
    pub genesis: Block,
    /// Magic bytes prefixing every P2P message.
    pub message_start: [u8; 4],
    /// Default P2P port.
    pub default_port: u16,
    /// Height below which block files are never pruned.
    pub prune_after_height: u64,
    /// Approximate size of the full block chain on disk, in GB.
    pub assumed_blockchain_size: u64,
    /// Approximate size of the chain state on disk, in GB.
    pub assumed_chain_state_size: u64,
    /// DNS seed host names.
    pub dns_seeds: &'static [&'static str],
    /// Fixed peer addresses.
    pub fixed_seeds: &'static [FixedSeed],
    /// Base58 version prefixes.
    pub base58_prefixes: Base58Prefixes,
    /// Human readable part of bech32 addresses.
    pub bech32_hrp: &'static str,
    /// Known-good blocks.
    pub checkpoints: Checkpoints,
    /// Transaction statistics snapshot.
    pub chain_tx_data: ChainTxData,
    /// Whether wallets may fall back to a default fee.
    pub fallback_fee_enabled: bool,
    /// Whether expensive consistency checks are on by default.
    pub default_consistency_checks: bool,
    /// Whether only standard transactions are relayed and mined.
    pub require_standard: bool,
    /// Whether blocks are only mined on request.
    pub mine_blocks_on_demand: bool,
}

/// Literal inputs of a network's genesis block and its recorded hashes.
struct GenesisSpec {
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
    hash: &'static str,
    merkle_root: &'static str,
}

const GENESIS_MERKLE_ROOT: &str = "3f75db3c18e92f46c21530dc1222e1fddf4ccebbf88e289a6c9dc787fd6469da";

const MAINNET_GENESIS: GenesisSpec = GenesisSpec {
    time: 1393164995,
    nonce: 2092903596,
    bits: 0x1e0fffff,
    version: 2,
    reward: 1000 * COIN_VALUE,
    hash: "00000ffde4c020b5938441a0ea3d314bf619eff0b38f32f78f7583cffa1ea485",
    merkle_root: GENESIS_MERKLE_ROOT,
};

const TESTNET_GENESIS: GenesisSpec = GenesisSpec {
    time: 1392876393,
    nonce: 416875379,
    bits: 0x1e0fffff,
    version: 2,
    reward: 1000 * COIN_VALUE,
    hash: "0000017ce2a79c8bddafbbe47c004aa92b20678c354b34085f62b762084b9788",
    merkle_root: GENESIS_MERKLE_ROOT,
};

const REGTEST_GENESIS: GenesisSpec = GenesisSpec {
    time: 1296688602,
    nonce: 4,
    bits: 0x207fffff,
    version: 2,
    reward: 1000 * COIN_VALUE,
    hash: "63b92987ddc93808aa33dddc80b3e52948bdfffaf2420bf4cd9c5137b54ea37c",
    merkle_root: GENESIS_MERKLE_ROOT,
};

const MAINNET_SEEDS: &[&str] = &[
    "seed.myriadcoin.cc",
    "dnsseed.myriadcoin.cc",
    "seed1.myriadcoin.org",
    "seed2.myriadcoin.org",
    "seed3.myriadcoin.org",
    "seed4.myriadcoin.org",
    "seed5.myriadcoin.org",
    "seed6.myriadcoin.org",
    "seed7.myriadcoin.org",
    "seed8.myriadcoin.org",
    "myriadseed1.cryptapus.org",
    "xmy-seed1.coinid.org",
];

const TESTNET_SEEDS: &[&str] = &["testseed1.myriadcoin.org", "myriadtestseed1.cryptapus.org"];

// TODO: generate the mainnet and testnet fixed seed tables from the current node lists.
const MAINNET_FIXED_SEEDS: &[FixedSeed] = &[];
const TESTNET_FIXED_SEEDS: &[FixedSeed] = &[];

const MAINNET_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "00000ffde4c020b5938441a0ea3d314bf619eff0b38f32f78f7583cffa1ea485"),
    (9646, "0000000000000b0f1372211861f226a3ec06a27d0a5bf36e4244a982da077e8f"),
    (27255, "00000000000005112a0debf53703eb3dc4ec2d8d68599c90db71423ea14489b7"),
    (70623, "00000000000004767ff6e509d00772af5c4bedaa82c38c1e95c33adbf5ff84f5"),
    (112567, "000000000000018c0621bf32ab33d3ca871509f406f08be6dd20facea747b099"),
    (141845, "00000000000000f62d14d55c2bc3ec0ba94e4f2b3868bbe7be9cb5b681fcc0fb"),
    (149540, "000000000000061b8f5b8653fe13b5e453347d9386d43d09445ee5e26a8222bb"),
    (348178, "0000000000000a410c6aff939087769e757132098fa0b0ce89f11d68f935077d"),
    (431747, "000000000000065616abeccd681f7b4d6d7bed06deef0e1a6e70c905edae3692"),
    (490168, "000000000000155ce9845e501617f152127e32c2c468edc643809f9988d30327"),
    (557719, "0000000000000851f690d42129b34408697c88316879debd413049959517d7c6"),
    (740001, "00000000000002c7aaa3ad688eb5af7d2779f4aa1d9a1b9a5c3cfb4ccad56caa"),
    (740576, "00000000000043dc047538e724f17a388146f22dd2ecf66f3c88253799912f4d"),
    (766081, "00000000000001e604a7acc2dd539ff8bd51224a7aac8647736d1af10160427d"),
    (1007712, "00000000000013e0fb1ec8ba2ce0b04b1547d9ae7d9c9e5a2691aeca87559a12"),
    (1077647, "00000000000038b85361a79dd4a04b1f01ec2cc60f4176185363aa4522aab12d"),
    (1177283, "000000000000359b1fb371d92db45de64b449ea72863a51fa78fea6b7ff3989f"),
    (1336174, "00000000000001eafb1051fda69eb842577a0e48e4f0682bd7f33677373d0807"),
    (1402167, "8215cd9feb2db9bf74514361a9d4b4440f054101079df8bb6bf629065db3ab29"),
    (1449500, "ef19939e314f239999b9959ac908b20a43b165719d1c35dcfe38ba2566d20765"),
    (1681927, "9be88de17bccfa3ceb43d158652189af2c3038460dcf91732320a73557fe6a2e"),
    (1764003, "f969487c0ba2426bf767a5cb83c6bb7f3f9a19cccdcfc50cf5db0b39032aae55"),
    (1863106, "c2a2012bac1de0e0039efb958e3465390eb7dcd439d83be077dc1c1006d0ebd6"),
    (2210002, "9e16b567c393c46e40b4b4c4a21283b998aec17b3c7edf8319b3860e4403e4bf"),
    (2587043, "6bebe78892419acf8f47fa34ac08417036c244a244d209dbb5113edfda7ae480"),
    (2772278, "0e7606672e9651e8b2e04b8463b824c7149300ac1b79610d79150996bad34b18"),
];

const TESTNET_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "0000017ce2a79c8bddafbbe47c004aa92b20678c354b34085f62b762084b9788"),
    (800, "00000071942cef6d87635a92f106d5b1935b1314538af80922c766487afd8b22"),
    (26607, "000000c00310153e400312a5f10a51c14abd4d4456ad92a8efcb516c7c00fde5"),
];

const REGTEST_CHECKPOINTS: &[(u32, &str)] =
    &[(0, "63b92987ddc93808aa33dddc80b3e52948bdfffaf2420bf4cd9c5137b54ea37c")];

const MAINNET_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 50,
    script_address: 9,
    secret_key: 178,
    ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
};

const TESTNET_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 88,
    script_address: 188,
    secret_key: 239,
    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

const REGTEST_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 111,
    script_address: 196,
    secret_key: 239,
    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

impl ChainParams {
    /// Builds and verifies the parameters of `network`.
    ///
    /// `args.vbparams` is applied to the consensus table before the profile
    /// is sealed; networks that do not accept overrides ignore it with a
    /// warning.
    pub fn new(network: Network, args: &ChainArgs) -> Result<ChainParams, Error> {
        let mut consensus = Params::new(network)?;
        if network.accepts_vbparams() {
            vbparams::apply_overrides(&mut consensus, &args.vbparams)?;
        } else if !args.vbparams.is_empty() {
            warn!("Ignoring -vbparams on {}, overrides are only accepted on regtest", network);
        }

        let params = match network {
            Network::Main => ChainParams::mainnet(consensus)?,
            Network::Testnet => ChainParams::testnet(consensus)?,
            Network::Regtest => ChainParams::regtest(consensus)?,
        };
        debug!(
            "Built {} chain params, genesis {}",
            network, params.consensus.hash_genesis_block
        );
        Ok(params)
    }

    fn mainnet(mut consensus: Params) -> Result<ChainParams, IntegrityError> {
        let genesis = build_genesis(Network::Main, &MAINNET_GENESIS)?;
        consensus.hash_genesis_block = genesis.block_hash();
        Ok(ChainParams {
            network: Network::Main,
            consensus,
            genesis,
            message_start: [0xaf, 0x45, 0x76, 0xee],
            default_port: 10888,
            prune_after_height: 100000,
            assumed_blockchain_size: 240,
            assumed_chain_state_size: 3,
            dns_seeds: MAINNET_SEEDS,
            fixed_seeds: MAINNET_FIXED_SEEDS,
            base58_prefixes: MAINNET_PREFIXES,
            bech32_hrp: "my",
            checkpoints: Checkpoints::parse(Network::Main, MAINNET_CHECKPOINTS)?,
            // getchaintxstats 4096 at block 2772278
            chain_tx_data: ChainTxData { time: 1555832230, tx_count: 6343318, tx_rate: 0.0172 },
            fallback_fee_enabled: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
        })
    }

    fn testnet(mut consensus: Params) -> Result<ChainParams, IntegrityError> {
        let genesis = build_genesis(Network::Testnet, &TESTNET_GENESIS)?;
        consensus.hash_genesis_block = genesis.block_hash();
        Ok(ChainParams {
            network: Network::Testnet,
            consensus,
            genesis,
            message_start: [0x01, 0xf5, 0x55, 0xa4],
            default_port: 20888,
            prune_after_height: 1000,
            assumed_blockchain_size: 30,
            assumed_chain_state_size: 2,
            dns_seeds: TESTNET_SEEDS,
            fixed_seeds: TESTNET_FIXED_SEEDS,
            base58_prefixes: TESTNET_PREFIXES,
            bech32_hrp: "tm",
            checkpoints: Checkpoints::parse(Network::Testnet, TESTNET_CHECKPOINTS)?,
            // getchaintxstats 4096 at block 26607
            chain_tx_data: ChainTxData { time: 1549032928, tx_count: 26673, tx_rate: 0.00166 },
            fallback_fee_enabled: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
        })
    }

    fn regtest(mut consensus: Params) -> Result<ChainParams, IntegrityError> {
        let genesis = build_genesis(Network::Regtest, &REGTEST_GENESIS)?;
        consensus.hash_genesis_block = genesis.block_hash();
        Ok(ChainParams {
            network: Network::Regtest,
            consensus,
            genesis,
            message_start: [0xfa, 0xbf, 0xb5, 0xda],
            default_port: 18444,
            prune_after_height: 1000,
            assumed_blockchain_size: 0,
            assumed_chain_state_size: 0,
            dns_seeds: &[],
            fixed_seeds: &[],
            base58_prefixes: REGTEST_PREFIXES,
            bech32_hrp: "bcrt",
            checkpoints: Checkpoints::parse(Network::Regtest, REGTEST_CHECKPOINTS)?,
            chain_tx_data: ChainTxData::default(),
            fallback_fee_enabled: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
        })
    }
}

fn build_genesis(network: Network, spec: &GenesisSpec) -> Result<Block, IntegrityError> {
    let genesis = genesis_block(spec.time, spec.nonce, spec.bits, spec.version, spec.reward)?;
    verify_genesis(network, &genesis, spec.hash, spec.merkle_root)?;
    Ok(genesis)
}

/// Checks that `genesis` hashes to `hash` and commits to `merkle_root`.
fn verify_genesis(
    network: Network,
    genesis: &Block,
    hash: &str,
    merkle_root: &str,
) -> Result<(), IntegrityError> {
    let expected = BlockHash::from_hex(hash)?;
    let computed = genesis.block_hash();
    if computed != expected {
        error!("{} genesis hash {} does not match {}", network, computed, expected);
        return Err(IntegrityError::GenesisHash { network, expected, computed });
    }

    let expected = TxMerkleNode::from_hex(merkle_root)?;
    let computed = genesis.header.merkle_root;
    if computed != expected {
        error!("{} genesis merkle root {} does not match {}", network, computed, expected);
        return Err(IntegrityError::MerkleRoot { network, expected, computed });
    }
    Ok(())
}

/// Builds the parameters for a network tag (`main`, `test` or `regtest`).
pub fn create_chain_params(tag: &str, args: &ChainArgs) -> Result<ChainParams, Error> {
    let network: Network = tag.parse()?;
    ChainParams::new(network, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::versionbits::Deployment;

    fn build(network: Network) -> ChainParams {
        ChainParams::new(network, &ChainArgs::default()).unwrap()
    }

    #[test]
    fn genesis_hashes() {
        let main = build(Network::Main);
        assert_eq!(main.consensus.hash_genesis_block, main.genesis.block_hash());
        assert_eq!(
            main.consensus.hash_genesis_block.to_string(),
            "00000ffde4c020b5938441a0ea3d314bf619eff0b38f32f78f7583cffa1ea485"
        );
        assert_eq!(main.genesis.header.merkle_root.to_string(), GENESIS_MERKLE_ROOT);

        let test = build(Network::Testnet);
        assert_eq!(
            test.consensus.hash_genesis_block.to_string(),
            "0000017ce2a79c8bddafbbe47c004aa92b20678c354b34085f62b762084b9788"
        );

        let regtest = build(Network::Regtest);
        assert_eq!(
            regtest.consensus.hash_genesis_block.to_string(),
            "63b92987ddc93808aa33dddc80b3e52948bdfffaf2420bf4cd9c5137b54ea37c"
        );
    }

    #[test]
    fn deterministic() {
        for net in Network::ALL.iter() {
            assert_eq!(build(*net), build(*net));
        }
    }

    #[test]
    fn tampered_genesis_is_rejected() {
        let spec = GenesisSpec { nonce: MAINNET_GENESIS.nonce + 1, ..MAINNET_GENESIS };
        match build_genesis(Network::Main, &spec) {
            Err(IntegrityError::GenesisHash { network, expected, computed }) => {
                assert_eq!(network, Network::Main);
                assert_eq!(expected.to_string(), MAINNET_GENESIS.hash);
                assert_ne!(computed, expected);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn wrong_merkle_root_is_rejected() {
        let genesis = genesis_block(1296688602, 4, 0x207fffff, 2, 1000 * COIN_VALUE).unwrap();
        let err = verify_genesis(Network::Regtest, &genesis, REGTEST_GENESIS.hash, &"00".repeat(32))
            .unwrap_err();
        match err {
            IntegrityError::MerkleRoot { network, .. } => assert_eq!(network, Network::Regtest),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn bad_literal_is_rejected() {
        let genesis = genesis_block(1296688602, 4, 0x207fffff, 2, 1000 * COIN_VALUE).unwrap();
        let err = verify_genesis(Network::Regtest, &genesis, "zz", GENESIS_MERKLE_ROOT).unwrap_err();
        assert!(matches!(err, IntegrityError::Literal(_)));
    }

    #[test]
    fn checkpoints_are_ordered() {
        for net in Network::ALL.iter() {
            let params = build(*net);
            assert!(!params.checkpoints.is_empty());
            let heights: Vec<u32> = params.checkpoints.iter().map(|c| c.height).collect();
            assert!(heights.windows(2).all(|w| w[0] < w[1]), "{}", net);
            assert_eq!(params.checkpoints.hash_at(0), Some(&params.consensus.hash_genesis_block));
        }

        let main = build(Network::Main);
        assert_eq!(main.checkpoints.len(), 26);
        assert_eq!(main.checkpoints.last().map(|c| c.height), Some(2772278));
        assert_eq!(
            main.checkpoints.last().map(|c| c.hash),
            Some(main.consensus.default_assume_valid)
        );
        assert_eq!(
            main.checkpoints.hash_at(9646).map(|h| h.to_string()),
            Some("0000000000000b0f1372211861f226a3ec06a27d0a5bf36e4244a982da077e8f".to_owned())
        );
        assert_eq!(main.checkpoints.hash_at(9647), None);
    }

    #[test]
    fn checkpoint_order_violation() {
        let literals = [
            (0, REGTEST_GENESIS.hash),
            (10, REGTEST_GENESIS.hash),
            (10, REGTEST_GENESIS.hash),
        ];
        assert_eq!(
            Checkpoints::parse(Network::Regtest, &literals),
            Err(IntegrityError::CheckpointOrder { network: Network::Regtest, height: 10 })
        );
    }

    #[test]
    fn pow_limit_encodes_genesis_bits() {
        for net in [Network::Main, Network::Regtest].iter() {
            let params = build(*net);
            assert_eq!(params.consensus.pow_limit.to_compact(), params.genesis.header.bits);
        }
    }

    #[test]
    fn wire_and_address_constants() {
        let main = build(Network::Main);
        assert_eq!(main.message_start, [0xaf, 0x45, 0x76, 0xee]);
        assert_eq!(main.base58_prefixes.pubkey_address, 50);
        assert_eq!(main.bech32_hrp, "my");
        assert_eq!(main.dns_seeds.len(), 12);
        assert!(!main.fallback_fee_enabled);
        assert!(main.require_standard);

        let test = build(Network::Testnet);
        assert_eq!(test.default_port, 20888);
        assert_eq!(test.base58_prefixes.ext_public_key, [0x04, 0x35, 0x87, 0xCF]);
        assert_eq!(test.bech32_hrp, "tm");

        let regtest = build(Network::Regtest);
        assert_eq!(regtest.message_start, [0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(regtest.default_port, 18444);
        assert!(regtest.dns_seeds.is_empty());
        assert!(regtest.fixed_seeds.is_empty());
        assert!(regtest.mine_blocks_on_demand);
        assert!(regtest.default_consistency_checks);
        assert_eq!(regtest.chain_tx_data, ChainTxData::default());

        let magics: Vec<[u8; 4]> = Network::ALL.iter().map(|n| build(*n).message_start).collect();
        assert_ne!(magics[0], magics[1]);
        assert_ne!(magics[1], magics[2]);
        assert_ne!(magics[0], magics[2]);
    }

    #[test]
    fn relaxation_flags() {
        let main = build(Network::Main);
        assert!(!main.consensus.pow_no_retargeting);
        assert!(!main.consensus.pow_allow_min_difficulty_blocks);

        let regtest = build(Network::Regtest);
        assert!(regtest.consensus.pow_no_retargeting);
        assert!(regtest.consensus.pow_allow_min_difficulty_blocks);
    }

    #[test]
    fn regtest_applies_vbparams() {
        let args = ChainArgs { vbparams: vec!["segwit:100:200".to_owned()], ..Default::default() };
        let params = ChainParams::new(Network::Regtest, &args).unwrap();
        let segwit = params.consensus.deployment(Deployment::Segwit);
        assert_eq!((segwit.start_time, segwit.timeout), (100, 200));

        let args = ChainArgs { vbparams: vec!["segwit:abc:200".to_owned()], ..Default::default() };
        assert!(ChainParams::new(Network::Regtest, &args).is_err());
    }

    #[test]
    fn other_networks_ignore_vbparams() {
        let args = ChainArgs { vbparams: vec!["segwit:100:200".to_owned()], ..Default::default() };
        assert_eq!(ChainParams::new(Network::Main, &args).unwrap(), build(Network::Main));
    }

    #[test]
    fn create_by_tag() {
        let args = ChainArgs::default();
        assert_eq!(create_chain_params("test", &args).unwrap().network, Network::Testnet);
        match create_chain_params("foo", &args) {
            Err(Error::Network(e)) => assert_eq!(e.0, "foo"),
            other => panic!("unexpected result: {:?}", other.map(|p| p.network)),
        }
    }
}
