// SPDX-License-Identifier: CC0-1.0

//! Blockdata
//!
//! This module defines the structures the genesis block is made of: the
//! block and its header, transactions, and the scripts inside them.
//!

pub mod block;
pub mod constants;
pub mod opcodes;
pub mod script;
pub mod transaction;
