// SPDX-License-Identifier: CC0-1.0

//! Active chain parameters
//!
//! A node selects its network once at startup and then hands the resulting
//! parameters to every component that needs them. [`ParamsRegistry`] owns
//! that selection; the [`ChainParams`] it hands out are shared and
//! immutable, so readers on any thread need no locking.
//!

use std::sync::Arc;

use crate::chainparams::{create_chain_params, ChainArgs, ChainParams};
use crate::error::Error;

/// Owner of the selected chain parameters.
#[derive(Debug, Default)]
pub struct ParamsRegistry {
    active: Option<Arc<ChainParams>>,
}

impl ParamsRegistry {
    /// Creates a registry with no network selected.
    pub fn new() -> ParamsRegistry {
        ParamsRegistry { active: None }
    }

    /// Builds the parameters for `tag` and makes them the active ones.
    ///
    /// On failure the previous selection, if any, is kept.
    pub fn select(&mut self, tag: &str, args: &ChainArgs) -> Result<Arc<ChainParams>, Error> {
        let params = Arc::new(create_chain_params(tag, args)?);
        if let Some(ref prev) = self.active {
            debug!("Replacing {} chain params with {}", prev.network, params.network);
        } else {
            debug!("Selected {} chain params", params.network);
        }
        self.active = Some(params.clone());
        Ok(params)
    }

    /// Selects the network named by startup options.
    pub fn select_from_args(&mut self, args: &ChainArgs) -> Result<Arc<ChainParams>, Error> {
        let tag = args.network_tag()?.to_owned();
        self.select(&tag, args)
    }

    /// The active parameters.
    pub fn active(&self) -> Result<Arc<ChainParams>, Error> {
        self.active.clone().ok_or(Error::NotSelected)
    }

    /// Whether a network has been selected.
    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }
}
