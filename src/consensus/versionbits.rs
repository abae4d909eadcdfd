// SPDX-License-Identifier: CC0-1.0

//! Version bits deployments
//!
//! Each soft fork is signalled on one bit of the block version between a
//! start time and a timeout. This module names the known deployments and
//! holds their activation windows.
//!

use std::ops::{Index, IndexMut};

/// Start time meaning the deployment is active from genesis.
pub const ALWAYS_ACTIVE: i64 = -1;

/// Timeout meaning the deployment never expires.
pub const NO_TIMEOUT: i64 = i64::MAX;

/// Number of known version bits deployments.
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 7;

/// A known version bits deployment.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Deployment {
    /// Test-only dummy deployment.
    TestDummy,
    /// Relative lock-time: BIP68, BIP112 and BIP113.
    Csv,
    /// Segregated witness: BIP141, BIP143 and BIP147.
    Segwit,
    /// Legacy blocks, keeps v0.11 nodes on the same chain.
    Legbit,
    /// MIP2, reserves algorithm ids in the block version.
    ReserveAlgo,
    /// MIP3, longer block intervals with matching halving schedule.
    LongBlocks,
    /// Argon2d4096 mining replacing Skein.
    Argon2d,
}

impl Deployment {
    /// Every deployment, in table order.
    pub const ALL: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS] = [
        Deployment::TestDummy,
        Deployment::Csv,
        Deployment::Segwit,
        Deployment::Legbit,
        Deployment::ReserveAlgo,
        Deployment::LongBlocks,
        Deployment::Argon2d,
    ];

    /// The name used for this deployment in `-vbparams` and RPC output.
    pub fn name(self) -> &'static str {
        match self {
            Deployment::TestDummy => "testdummy",
            Deployment::Csv => "csv",
            Deployment::Segwit => "segwit",
            Deployment::Legbit => "legbit",
            Deployment::ReserveAlgo => "reservealgo",
            Deployment::LongBlocks => "longblocks",
            Deployment::Argon2d => "argon2d",
        }
    }

    /// Looks up a deployment by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Deployment> {
        Deployment::ALL.iter().copied().find(|d| d.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The signalling bit and time window of one deployment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeploymentWindow {
    /// Bit position to select the particular bit in the block version, 0..=28.
    pub bit: u8,
    /// Start MedianTime for version bits miner confirmation, or [`ALWAYS_ACTIVE`].
    pub start_time: i64,
    /// Timeout/expiry MedianTime for the deployment attempt, or [`NO_TIMEOUT`].
    pub timeout: i64,
}

impl DeploymentWindow {
    /// Creates a window for `bit` between `start_time` and `timeout`.
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> DeploymentWindow {
        DeploymentWindow { bit, start_time, timeout }
    }

    /// The block version mask signalling this deployment.
    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    /// Whether the deployment is active from genesis.
    pub fn is_always_active(&self) -> bool {
        self.start_time == ALWAYS_ACTIVE
    }

    /// Whether the deployment never times out.
    pub fn has_no_timeout(&self) -> bool {
        self.timeout == NO_TIMEOUT
    }

    /// Whether the window is usable: the bit fits the version field and,
    /// when both ends are concrete times, the start precedes the timeout.
    pub fn is_well_formed(&self) -> bool {
        if self.bit > 28 {
            return false;
        }
        if self.is_always_active() || self.has_no_timeout() {
            return true;
        }
        self.start_time < self.timeout
    }
}

/// Deployment windows indexed by [`Deployment`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Deployments([DeploymentWindow; MAX_VERSION_BITS_DEPLOYMENTS]);

impl Deployments {
    /// Creates the table from windows given in [`Deployment::ALL`] order.
    pub const fn new(windows: [DeploymentWindow; MAX_VERSION_BITS_DEPLOYMENTS]) -> Deployments {
        Deployments(windows)
    }

    /// Iterates over the deployments and their windows.
    pub fn iter(&self) -> impl Iterator<Item = (Deployment, &DeploymentWindow)> {
        self.0.iter().enumerate().map(|(i, window)| (Deployment::ALL[i], window))
    }
}

impl Index<Deployment> for Deployments {
    type Output = DeploymentWindow;

    fn index(&self, deployment: Deployment) -> &DeploymentWindow {
        &self.0[deployment.index()]
    }
}

impl IndexMut<Deployment> for Deployments {
    fn index_mut(&mut self, deployment: Deployment) -> &mut DeploymentWindow {
        &mut self.0[deployment.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for d in Deployment::ALL.iter() {
            assert_eq!(Deployment::from_name(d.name()), Some(*d));
        }
        assert_eq!(Deployment::from_name("segwit"), Some(Deployment::Segwit));
        assert_eq!(Deployment::from_name("SegWit"), None);
        assert_eq!(Deployment::from_name("bogus"), None);
    }

    #[test]
    fn table_order_matches_index() {
        for (i, d) in Deployment::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn window_predicates() {
        let w = DeploymentWindow::new(1, ALWAYS_ACTIVE, NO_TIMEOUT);
        assert!(w.is_always_active());
        assert!(w.has_no_timeout());
        assert!(w.is_well_formed());
        assert_eq!(w.mask(), 0b10);

        assert!(DeploymentWindow::new(0, 100, 200).is_well_formed());
        assert!(!DeploymentWindow::new(0, 200, 200).is_well_formed());
        assert!(!DeploymentWindow::new(29, 100, 200).is_well_formed());
    }

    #[test]
    fn index_and_iterate() {
        let mut table = Deployments::new([DeploymentWindow::new(0, 0, 1); MAX_VERSION_BITS_DEPLOYMENTS]);
        table[Deployment::Argon2d] = DeploymentWindow::new(6, 5, 10);
        assert_eq!(table[Deployment::Argon2d].bit, 6);
        assert_eq!(table.iter().count(), MAX_VERSION_BITS_DEPLOYMENTS);
        assert_eq!(table.iter().last().map(|(d, w)| (d, w.start_time)), Some((Deployment::Argon2d, 5)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Deployment::ReserveAlgo,
            &[Token::UnitVariant { name: "Deployment", variant: "reservealgo" }],
        );
        assert_tokens(
            &DeploymentWindow::new(1, ALWAYS_ACTIVE, NO_TIMEOUT),
            &[
                Token::Struct { name: "DeploymentWindow", len: 3 },
                Token::Str("bit"),
                Token::U8(1),
                Token::Str("start_time"),
                Token::I64(-1),
                Token::Str("timeout"),
                Token::I64(i64::MAX),
                Token::StructEnd,
            ],
        );
    }
}
