// SPDX-License-Identifier: CC0-1.0

//! Consensus
//!
//! This module defines the consensus parameters of each network, their
//! version bits deployments, and the serialization used to hash blocks and
//! transactions.
//!

pub mod encode;
pub mod params;
pub mod vbparams;
pub mod versionbits;

pub use self::params::Params;
