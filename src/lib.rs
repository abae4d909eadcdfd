// SPDX-License-Identifier: CC0-1.0

//! # Chain parameters
//!
//! This library defines the networks a multi-algorithm proof-of-work node
//! can run on and everything that distinguishes them: consensus thresholds
//! and fork heights, version bits deployment windows, the genesis block,
//! wire magic, address prefixes, seeds and checkpoints.
//!
//! Parameters are built once at startup through a [`ParamsRegistry`] and are
//! immutable afterwards. Every genesis block is rebuilt from its literal
//! inputs and checked against its recorded hash before it is handed out.
//!
//! ```rust
//! use chainparams::{ChainArgs, Network, ParamsRegistry};
//!
//! let mut registry = ParamsRegistry::new();
//! let args = ChainArgs::from_args(&["-regtest", "-vbparams=segwit:0:10"]);
//! let params = registry.select_from_args(&args).unwrap();
//! assert_eq!(params.network, Network::Regtest);
//! assert!(params.consensus.pow_no_retargeting);
//! ```

#![crate_name = "chainparams"]
#![crate_type = "rlib"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

// Re-exported dependencies.
#[macro_use] pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

#[macro_use] extern crate log;
#[cfg(feature = "serde")] #[macro_use] extern crate serde;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;

#[cfg(target_pointer_width = "16")]
compile_error!("chainparams cannot be used on 16-bit architectures");

pub mod network;
pub mod blockdata;
pub mod util;
pub mod consensus;
pub mod chainparams;
pub mod error;
// Do not remove: required in order to get hash types implementation macros to work correctly
#[allow(unused_imports)]
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::{Block, BlockHeader};
pub use crate::chainparams::{create_chain_params, ChainArgs, ChainParams, ParamsRegistry};
pub use crate::consensus::params::Params;
pub use crate::consensus::versionbits::{Deployment, DeploymentWindow};
pub use crate::error::Error;
pub use crate::network::constants::Network;
pub use crate::util::uint::Uint256;
