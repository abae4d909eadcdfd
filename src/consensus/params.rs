// SPDX-License-Identifier: CC0-1.0

//! Consensus parameters
//!
//! This module provides the predefined set of consensus parameters for
//! each network. The production and public test tables record the heights
//! at which the chain's historical forks actually happened; they are data,
//! not something to be derived.
//!

use hashes::hex::FromHex;

use crate::chainparams::IntegrityError;
use crate::consensus::versionbits::{
    Deployment, DeploymentWindow, Deployments, ALWAYS_ACTIVE, NO_TIMEOUT,
};
use crate::hash_types::BlockHash;
use crate::network::constants::Network;
use crate::util::uint::Uint256;

/// Timeout used by regtest for the chain-specific deployments.
const REGTEST_DEPLOYMENT_TIMEOUT: i64 = 999_999_999_999;

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Hash of the genesis block, filled in once the genesis block has been
    /// built and verified.
    pub hash_genesis_block: BlockHash,

    /// Target block spacing across all algorithms before phase 2, in seconds.
    pub pow_target_spacing_v1: i64,
    /// Target block spacing across all algorithms from phase 2, in seconds.
    pub pow_target_spacing_v2: i64,
    /// Number of blocks to take the timespan of.
    pub averaging_interval: i64,

    /// Height from which merge-mined (auxpow) blocks are allowed.
    pub start_aux_pow: u32,
    /// Chain id committed to by merge-mined blocks.
    pub aux_pow_chain_id: i32,
    /// Whether the parent chain must use a different chain id.
    pub strict_chain_id: bool,

    /// Height where time warp prevention 1 starts.
    pub block_time_warp_prevent_start_1: u32,
    /// Height where time warp prevention 2 starts.
    pub block_time_warp_prevent_start_2: u32,
    /// Height where time warp prevention 3 starts.
    pub block_time_warp_prevent_start_3: u32,
    /// Height where the 60 second target spacing kicks in.
    pub phase2_timespan_start: u32,
    /// Height where difficulty adjustment V2 starts.
    pub block_diff_adjust_v2: u32,

    /// Maximum difficulty adjustment down, in percent.
    pub max_adjust_down: i64,
    /// Maximum difficulty adjustment up before difficulty adjustment V2, in percent.
    pub max_adjust_up_v1: i64,
    /// Maximum difficulty adjustment up from difficulty adjustment V2, in percent.
    pub max_adjust_up_v2: i64,

    /// Height where the first sequential algorithm rule starts.
    pub block_sequential_algo_rule_start_1: u32,
    /// Height where the second sequential algorithm rule starts.
    pub block_sequential_algo_rule_start_2: u32,
    /// Maximum consecutive blocks of the same algorithm under rule 1.
    pub block_sequential_algo_max_count_1: u32,
    /// Maximum consecutive blocks of the same algorithm under rule 2.
    pub block_sequential_algo_max_count_2: u32,
    /// Maximum consecutive blocks of the same algorithm from fork 1.
    pub block_sequential_algo_max_count_3: u32,

    /// Height where per-algorithm work weighting starts.
    pub block_algo_work_weight_start: u32,
    /// Height where combined (normalised) algorithm work starts.
    pub block_algo_normalised_work_start: u32,
    /// Height where normalised work decay 1 starts.
    pub block_algo_normalised_work_decay_start_1: u32,
    /// Height where normalised work decay 2 starts.
    pub block_algo_normalised_work_decay_start_2: u32,
    /// Height where geometric average work starts.
    pub geo_avg_work_start: u32,
    /// Minimum height of fork 1 (algorithm switch, sequential count change).
    pub fork1_min_block: u32,
    /// Minimum height of fork 2 (algorithm switch, geometric previous work 2).
    pub fork2_min_block: u32,

    /// Height where MIP2 (reserved algorithm ids) is enforced.
    pub mip2_height: u32,
    /// First height of the legacy-bit compatibility window.
    pub legbit_start: u32,
    /// Last height of the legacy-bit compatibility window.
    pub legbit_stop: u32,

    /// MIP3 target spacing of the first long-blocks phase (2 minutes).
    pub pow_target_spacing_v3a: i64,
    /// MIP3 target spacing of the second long-blocks phase (4 minutes).
    pub pow_target_spacing_v3b: i64,
    /// MIP3 target spacing of the third long-blocks phase (8 minutes).
    pub pow_target_spacing_v3c: i64,
    /// Start of long blocks phase a, the original 3rd halving.
    pub longblocks_start_v1a: u32,
    /// Start of long blocks phase b, the original 4th halving.
    pub longblocks_start_v1b: u32,
    /// Start of long blocks phase c, the original 5th halving.
    pub longblocks_start_v1c: u32,
    /// Subsidy halving interval during long blocks phase a.
    pub subsidy_halving_interval_v2a: u32,
    /// Subsidy halving interval during long blocks phase b.
    pub subsidy_halving_interval_v2b: u32,
    /// Subsidy halving interval during long blocks phase c.
    pub subsidy_halving_interval_v2c: u32,

    /// Blocks between subsidy halvings.
    pub subsidy_halving_interval: u32,
    /// Block exempted from BIP16 (P2SH) enforcement.
    pub bip16_exception: BlockHash,
    /// Height where BIP34 (height in coinbase) becomes active.
    pub bip34_height: u32,
    /// Hash of the block at `bip34_height`.
    pub bip34_hash: BlockHash,
    /// Height where BIP65 (OP_CHECKLOCKTIMEVERIFY) becomes active.
    pub bip65_height: u32,
    /// Height where BIP66 (strict DER signatures) becomes active.
    pub bip66_height: u32,

    /// Proof of work limit: the easiest allowed target.
    pub pow_limit: Uint256,
    /// Expected amount of time to mine a retarget window, in seconds.
    pub pow_target_timespan: i64,
    /// Expected time between blocks currently in force, in seconds.
    pub pow_target_spacing: i64,
    /// Whether minimum difficulty blocks are allowed.
    pub pow_allow_min_difficulty_blocks: bool,
    /// Whether difficulty never adjusts, for deterministic local mining.
    pub pow_no_retargeting: bool,

    /// Minimum blocks signalling within a confirmation window for a
    /// deployment to lock in.
    pub rule_change_activation_threshold: u32,
    /// Number of blocks with the same set of rules.
    pub miner_confirmation_window: u32,
    /// Version bits deployment windows.
    pub deployments: Deployments,

    /// The best chain should have at least this much work.
    pub minimum_chain_work: Uint256,
    /// By default assume that the signatures in ancestors of this block are valid.
    pub default_assume_valid: BlockHash,
}

impl Params {
    /// Creates parameters set for the given network.
    ///
    /// Fails only if one of the compiled-in hash literals is malformed.
    pub fn new(network: Network) -> Result<Self, IntegrityError> {
        match network {
            Network::Main => Params::mainnet(),
            Network::Testnet => Params::testnet(),
            Network::Regtest => Params::regtest(),
        }
    }

    /// Number of blocks in one retarget window.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// The activation window of `deployment`.
    pub fn deployment(&self, deployment: Deployment) -> &DeploymentWindow {
        &self.deployments[deployment]
    }

    /// Overwrites the activation window times of `deployment`.
    pub(crate) fn update_version_bits_parameters(
        &mut self,
        deployment: Deployment,
        start_time: i64,
        timeout: i64,
    ) {
        let window = &mut self.deployments[deployment];
        window.start_time = start_time;
        window.timeout = timeout;
    }

    fn mainnet() -> Result<Self, IntegrityError> {
        Ok(Params {
            network: Network::Main,
            hash_genesis_block: Default::default(),

            pow_target_spacing_v1: 30,
            pow_target_spacing_v2: 60,
            averaging_interval: 10,

            start_aux_pow: 1_402_000,
            aux_pow_chain_id: 0x005A,
            strict_chain_id: false,

            block_time_warp_prevent_start_1: 740_500,
            block_time_warp_prevent_start_2: 766_000,
            block_time_warp_prevent_start_3: 1_048_320,
            phase2_timespan_start: 1_401_000,
            block_diff_adjust_v2: 766_000,

            max_adjust_down: 4,
            max_adjust_up_v1: 2,
            max_adjust_up_v2: 4,

            block_sequential_algo_rule_start_1: 740_000,
            block_sequential_algo_rule_start_2: 766_000,
            block_sequential_algo_max_count_1: 6,
            block_sequential_algo_max_count_2: 3,
            block_sequential_algo_max_count_3: 6,

            block_algo_work_weight_start: 142_000,
            block_algo_normalised_work_start: 740_000,
            block_algo_normalised_work_decay_start_1: 866_000,
            block_algo_normalised_work_decay_start_2: 932_000,
            geo_avg_work_start: 1_400_000,
            fork1_min_block: 1_764_000,
            fork2_min_block: 2_772_000,

            mip2_height: 2_328_480,
            legbit_start: 2_306_304,
            legbit_stop: 2_586_528,

            pow_target_spacing_v3a: 2 * 60,
            pow_target_spacing_v3b: 4 * 60,
            pow_target_spacing_v3c: 8 * 60,
            longblocks_start_v1a: 2_903_040,
            longblocks_start_v1b: 3_386_880,
            longblocks_start_v1c: 3_628_800,
            subsidy_halving_interval_v2a: 483_840,
            subsidy_halving_interval_v2b: 241_920,
            subsidy_halving_interval_v2c: 120_960,

            subsidy_halving_interval: 967_680,
            bip16_exception: block_hash("cb41589c918fba1beccca8bc6b34b2b928b4f9888595d7664afd6ec60a576291")?,
            bip34_height: 1,
            bip34_hash: block_hash("cb41589c918fba1beccca8bc6b34b2b928b4f9888595d7664afd6ec60a576291")?,
            bip65_height: 1_764_000,
            bip66_height: 1_764_000,

            pow_limit: Uint256::max_shr(20),
            pow_target_timespan: 14 * 24 * 60 * 60, // two weeks
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,

            rule_change_activation_threshold: 1512, // 75% of 2016
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                DeploymentWindow::new(28, 1199145601, 1230767999), // testdummy, 2008
                DeploymentWindow::new(0, 1512086400, 1543622400), // csv, December 1st 2017 to 2018
                DeploymentWindow::new(1, 1513296000, 1544832000), // segwit, December 15th 2017 to 2018
                DeploymentWindow::new(2, 1507420800, 1538956800), // legbit, October 8th 2017 to 2018
                DeploymentWindow::new(4, 1516320000, 1548979200), // reservealgo, Jan 19th 2018 to Feb 1st 2019
                DeploymentWindow::new(5, 1525132800, 1556668800), // longblocks, May 1st 2018 to 2019
                DeploymentWindow::new(6, 1550188800, 1581724800), // argon2d, February 15th 2019 to 2020
            ]),

            minimum_chain_work: uint256("0x0ce40000000000000000000000000000000000000000167e92f47c43f03e9eb4")?,
            default_assume_valid: block_hash("0e7606672e9651e8b2e04b8463b824c7149300ac1b79610d79150996bad34b18")?,
        })
    }

    fn testnet() -> Result<Self, IntegrityError> {
        Ok(Params {
            network: Network::Testnet,
            hash_genesis_block: Default::default(),

            pow_target_spacing_v1: 30,
            pow_target_spacing_v2: 60,
            averaging_interval: 10,

            start_aux_pow: 150,
            aux_pow_chain_id: 0x005A,
            strict_chain_id: false,

            block_time_warp_prevent_start_1: 1000,
            block_time_warp_prevent_start_2: 1005,
            block_time_warp_prevent_start_3: 1010,
            phase2_timespan_start: 150,
            block_diff_adjust_v2: 150,

            max_adjust_down: 4,
            max_adjust_up_v1: 2,
            max_adjust_up_v2: 4,

            block_sequential_algo_rule_start_1: 200,
            block_sequential_algo_rule_start_2: 250,
            block_sequential_algo_max_count_1: 6,
            block_sequential_algo_max_count_2: 3,
            block_sequential_algo_max_count_3: 6,

            block_algo_work_weight_start: 0,
            block_algo_normalised_work_start: 0,
            block_algo_normalised_work_decay_start_1: 0,
            block_algo_normalised_work_decay_start_2: 0,
            geo_avg_work_start: 150,
            fork1_min_block: 601,
            fork2_min_block: 32_256,

            mip2_height: 1,
            legbit_start: 8064,
            legbit_stop: 26_208,

            pow_target_spacing_v3a: 2 * 60,
            pow_target_spacing_v3b: 4 * 60,
            pow_target_spacing_v3c: 8 * 60,
            longblocks_start_v1a: 2_903_040,
            longblocks_start_v1b: 3_386_880,
            longblocks_start_v1c: 3_628_800,
            subsidy_halving_interval_v2a: 483_840,
            subsidy_halving_interval_v2b: 241_920,
            subsidy_halving_interval_v2c: 120_960,

            subsidy_halving_interval: 967_680,
            bip16_exception: block_hash("0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86b")?,
            bip34_height: 1,
            bip34_hash: block_hash("0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86b")?,
            bip65_height: 641,
            bip66_height: 641,

            pow_limit: Uint256::max_shr(16),
            pow_target_timespan: 14 * 24 * 60 * 60, // two weeks
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,

            rule_change_activation_threshold: 1512, // 75% for testchains
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                DeploymentWindow::new(28, 1199145601, 1230767999), // testdummy, 2008
                DeploymentWindow::new(0, 1504224000, 1535760000), // csv, September 1st 2017 to 2018
                DeploymentWindow::new(1, 1506816000, 1538352000), // segwit, October 1st 2017 to 2018
                DeploymentWindow::new(2, 1504224000, 1535760000), // legbit, September 1st 2017 to 2018
                DeploymentWindow::new(4, 1516320000, 1548979200), // reservealgo, Jan 19th 2018 to Feb 1st 2019
                DeploymentWindow::new(5, 1525132800, 1556668800), // longblocks, May 1st 2018 to 2019
                DeploymentWindow::new(6, 1546300800, 1577836800), // argon2d, January 1st 2019 to 2020
            ]),

            minimum_chain_work: Uint256::ZERO,
            default_assume_valid: block_hash("000000c00310153e400312a5f10a51c14abd4d4456ad92a8efcb516c7c00fde5")?,
        })
    }

    fn regtest() -> Result<Self, IntegrityError> {
        Ok(Params {
            network: Network::Regtest,
            hash_genesis_block: Default::default(),

            pow_target_spacing_v1: 30,
            pow_target_spacing_v2: 60,
            averaging_interval: 10,

            start_aux_pow: 150,
            aux_pow_chain_id: 0x005A,
            strict_chain_id: false,

            block_time_warp_prevent_start_1: 1000,
            block_time_warp_prevent_start_2: 1005,
            block_time_warp_prevent_start_3: 1010,
            phase2_timespan_start: 150,
            block_diff_adjust_v2: 150,

            max_adjust_down: 4,
            max_adjust_up_v1: 2,
            max_adjust_up_v2: 4,

            block_sequential_algo_rule_start_1: 200,
            block_sequential_algo_rule_start_2: 250,
            block_sequential_algo_max_count_1: 6,
            block_sequential_algo_max_count_2: 3,
            block_sequential_algo_max_count_3: 6,

            block_algo_work_weight_start: 0,
            block_algo_normalised_work_start: 0,
            block_algo_normalised_work_decay_start_1: 0,
            block_algo_normalised_work_decay_start_2: 0,
            geo_avg_work_start: 0,
            fork1_min_block: 601,
            fork2_min_block: 32_256,

            mip2_height: 1,
            legbit_start: 0,
            legbit_stop: 0,

            pow_target_spacing_v3a: 2 * 60,
            pow_target_spacing_v3b: 4 * 60,
            pow_target_spacing_v3c: 8 * 60,
            longblocks_start_v1a: 450,
            longblocks_start_v1b: 525,
            longblocks_start_v1c: 562,
            subsidy_halving_interval_v2a: 75,
            subsidy_halving_interval_v2b: 37,
            subsidy_halving_interval_v2c: 18,

            subsidy_halving_interval: 150,
            bip16_exception: BlockHash::default(),
            bip34_height: 500, // used in functional tests
            bip34_hash: BlockHash::default(),
            bip65_height: 1351, // used in functional tests
            bip66_height: 1251, // used in functional tests

            pow_limit: Uint256::max_shr(1),
            pow_target_timespan: 14 * 24 * 60 * 60, // two weeks
            pow_target_spacing: 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,

            rule_change_activation_threshold: 108, // 75% for testchains
            miner_confirmation_window: 144, // faster than normal for regtest
            deployments: Deployments::new([
                DeploymentWindow::new(28, 0, NO_TIMEOUT),
                DeploymentWindow::new(0, 0, NO_TIMEOUT),
                DeploymentWindow::new(1, ALWAYS_ACTIVE, NO_TIMEOUT),
                DeploymentWindow::new(2, 0, REGTEST_DEPLOYMENT_TIMEOUT),
                DeploymentWindow::new(4, 0, REGTEST_DEPLOYMENT_TIMEOUT),
                DeploymentWindow::new(5, 0, REGTEST_DEPLOYMENT_TIMEOUT),
                DeploymentWindow::new(6, 0, REGTEST_DEPLOYMENT_TIMEOUT),
            ]),

            minimum_chain_work: Uint256::ZERO,
            default_assume_valid: BlockHash::default(),
        })
    }
}

fn block_hash(s: &str) -> Result<BlockHash, IntegrityError> {
    Ok(BlockHash::from_hex(s)?)
}

fn uint256(s: &str) -> Result<Uint256, IntegrityError> {
    Ok(Uint256::from_hex(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_hashes_parse() {
        let main = Params::new(Network::Main).unwrap();
        assert_eq!(
            main.bip34_hash.to_string(),
            "cb41589c918fba1beccca8bc6b34b2b928b4f9888595d7664afd6ec60a576291"
        );
        assert_eq!(main.bip16_exception, main.bip34_hash);
        assert_eq!(
            main.default_assume_valid.to_string(),
            "0e7606672e9651e8b2e04b8463b824c7149300ac1b79610d79150996bad34b18"
        );
        assert_eq!(
            main.minimum_chain_work.to_string(),
            "0ce40000000000000000000000000000000000000000167e92f47c43f03e9eb4"
        );

        let test = Params::new(Network::Testnet).unwrap();
        assert_eq!(
            test.bip34_hash.to_string(),
            "0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86b"
        );
        assert_eq!(test.bip16_exception, test.bip34_hash);
        assert_eq!(
            test.default_assume_valid.to_string(),
            "000000c00310153e400312a5f10a51c14abd4d4456ad92a8efcb516c7c00fde5"
        );
        assert_eq!(test.minimum_chain_work, Uint256::ZERO);
    }

    #[test]
    fn malformed_literal_is_an_error() {
        // one digit short
        let short = "0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86";
        assert!(matches!(block_hash(short), Err(IntegrityError::Literal(_))));
        assert!(matches!(block_hash(&"zz".repeat(32)), Err(IntegrityError::Literal(_))));
        assert!(matches!(uint256(&"f".repeat(65)), Err(IntegrityError::Literal(_))));

        assert_eq!(
            block_hash("0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86b")
                .unwrap()
                .to_string(),
            "0000d23adc28e33bc05f4bee57c873ae0aab584a6a436e75ac0ed40396f6d86b"
        );
    }

    #[test]
    fn network_matches_table() {
        for net in Network::ALL.iter() {
            assert_eq!(Params::new(*net).unwrap().network, *net);
        }
    }

    #[test]
    fn non_production_relaxation() {
        let main = Params::new(Network::Main).unwrap();
        assert!(!main.pow_no_retargeting);
        assert!(!main.pow_allow_min_difficulty_blocks);

        let test = Params::new(Network::Testnet).unwrap();
        assert!(!test.pow_no_retargeting);
        assert!(test.pow_allow_min_difficulty_blocks);

        let regtest = Params::new(Network::Regtest).unwrap();
        assert!(regtest.pow_no_retargeting);
        assert!(regtest.pow_allow_min_difficulty_blocks);
    }

    #[test]
    fn pow_limit_ordering() {
        // regtest is the easiest, main the hardest
        let main = Params::new(Network::Main).unwrap().pow_limit;
        let test = Params::new(Network::Testnet).unwrap().pow_limit;
        let regtest = Params::new(Network::Regtest).unwrap().pow_limit;
        assert!(main < test);
        assert!(test < regtest);
    }

    #[test]
    fn retarget_window() {
        let main = Params::new(Network::Main).unwrap();
        assert_eq!(main.difficulty_adjustment_interval(), 20160);
        assert!(main.rule_change_activation_threshold <= main.miner_confirmation_window);

        let regtest = Params::new(Network::Regtest).unwrap();
        assert_eq!(regtest.miner_confirmation_window, 144);
        assert_eq!(regtest.rule_change_activation_threshold, 108);
    }

    #[test]
    fn deployment_windows() {
        for net in Network::ALL.iter() {
            let params = Params::new(*net).unwrap();
            for (deployment, window) in params.deployments.iter() {
                assert!(window.is_well_formed(), "{:?} on {}", deployment, net);
            }
            assert_eq!(params.deployment(Deployment::TestDummy).bit, 28);
            assert_eq!(params.deployment(Deployment::Csv).bit, 0);
            assert_eq!(params.deployment(Deployment::Segwit).bit, 1);
            assert_eq!(params.deployment(Deployment::Legbit).bit, 2);
            assert_eq!(params.deployment(Deployment::ReserveAlgo).bit, 4);
            assert_eq!(params.deployment(Deployment::LongBlocks).bit, 5);
            assert_eq!(params.deployment(Deployment::Argon2d).bit, 6);
        }

        let regtest = Params::new(Network::Regtest).unwrap();
        assert!(regtest.deployment(Deployment::Segwit).is_always_active());
        assert!(regtest.deployment(Deployment::Csv).has_no_timeout());
        assert_eq!(regtest.deployment(Deployment::Argon2d).timeout, 999_999_999_999);
    }

    #[test]
    fn regtest_zeroes_algo_rules() {
        let regtest = Params::new(Network::Regtest).unwrap();
        assert_eq!(regtest.block_algo_work_weight_start, 0);
        assert_eq!(regtest.block_algo_normalised_work_start, 0);
        assert_eq!(regtest.geo_avg_work_start, 0);
        assert_eq!(regtest.legbit_start, 0);
        assert_eq!(regtest.legbit_stop, 0);
        assert_eq!(regtest.minimum_chain_work, Uint256::ZERO);
        assert_eq!(regtest.default_assume_valid, BlockHash::default());
    }

    #[test]
    fn update_version_bits() {
        let mut regtest = Params::new(Network::Regtest).unwrap();
        let before = regtest.clone();
        regtest.update_version_bits_parameters(Deployment::Segwit, 100, 200);
        assert_eq!(regtest.deployment(Deployment::Segwit), &DeploymentWindow::new(1, 100, 200));
        for d in Deployment::ALL.iter().filter(|d| **d != Deployment::Segwit) {
            assert_eq!(regtest.deployment(*d), before.deployment(*d));
        }
    }
}
