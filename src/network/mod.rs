// SPDX-License-Identifier: CC0-1.0

//! Network support
//!
//! This module defines the networks a node can run on.
//!

pub mod constants;
