// SPDX-License-Identifier: CC0-1.0

//! Utility functions
//!
//! Functions needed by all parts of the library.
//!

pub mod uint;
