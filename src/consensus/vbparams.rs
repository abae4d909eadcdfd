// SPDX-License-Identifier: CC0-1.0

//! Version bits overrides
//!
//! Local test chains accept `-vbparams=<deployment>:<start>:<timeout>` to
//! move a deployment's activation window, so soft fork activation can be
//! exercised without waiting for the real dates.
//!

use std::fmt;
use std::str::FromStr;

use crate::consensus::params::Params;
use crate::consensus::versionbits::{Deployment, DeploymentWindow};
use crate::network::constants::Network;

/// An error parsing or applying a `-vbparams` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VBParamsError {
    /// The value is not of the form `deployment:start:end`.
    Malformed(String),
    /// The start time is not an integer.
    InvalidStartTime(String),
    /// The timeout is not an integer.
    InvalidTimeout(String),
    /// No deployment has this name.
    UnknownDeployment(String),
    /// The network does not allow its deployments to be overridden.
    UnsupportedNetwork(Network),
}

impl fmt::Display for VBParamsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VBParamsError::Malformed(ref s) => {
                write!(f, "version bits parameters malformed, expecting deployment:start:end, got {}", s)
            }
            VBParamsError::InvalidStartTime(ref s) => write!(f, "invalid nStartTime ({})", s),
            VBParamsError::InvalidTimeout(ref s) => write!(f, "invalid nTimeout ({})", s),
            VBParamsError::UnknownDeployment(ref s) => write!(f, "invalid deployment ({})", s),
            VBParamsError::UnsupportedNetwork(net) => {
                write!(f, "version bits parameters may only be overridden on regtest, not {}", net)
            }
        }
    }
}

impl std::error::Error for VBParamsError {}

/// A parsed `-vbparams` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VBParamsOverride {
    /// Deployment whose window is replaced.
    pub deployment: Deployment,
    /// New start time.
    pub start_time: i64,
    /// New timeout.
    pub timeout: i64,
}

impl FromStr for VBParamsOverride {
    type Err = VBParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(VBParamsError::Malformed(s.to_owned()));
        }

        let start_time =
            i64::from_str(parts[1]).map_err(|_| VBParamsError::InvalidStartTime(parts[1].to_owned()))?;
        let timeout =
            i64::from_str(parts[2]).map_err(|_| VBParamsError::InvalidTimeout(parts[2].to_owned()))?;
        let deployment =
            Deployment::from_name(parts[0]).ok_or_else(|| VBParamsError::UnknownDeployment(parts[0].to_owned()))?;

        Ok(VBParamsOverride { deployment, start_time, timeout })
    }
}

impl VBParamsOverride {
    /// Writes this override into `params`.
    pub fn apply(&self, params: &mut Params) {
        params.update_version_bits_parameters(self.deployment, self.start_time, self.timeout);
        info!(
            "Setting version bits activation parameters for {} to start={}, timeout={}",
            self.deployment.name(),
            self.start_time,
            self.timeout
        );

        let bit = params.deployment(self.deployment).bit;
        if !DeploymentWindow::new(bit, self.start_time, self.timeout).is_well_formed() {
            warn!(
                "Deployment {} starts at {} which is not before its timeout {}",
                self.deployment.name(),
                self.start_time,
                self.timeout
            );
        }
    }
}

/// Parses every raw `-vbparams` value and applies them in order.
///
/// Nothing is written unless all values parse, so a failed call leaves
/// `params` as it was. An empty list is a no-op on every network.
pub fn apply_overrides<S: AsRef<str>>(params: &mut Params, raw: &[S]) -> Result<(), VBParamsError> {
    if raw.is_empty() {
        return Ok(());
    }
    if !params.network.accepts_vbparams() {
        return Err(VBParamsError::UnsupportedNetwork(params.network));
    }

    let overrides = raw
        .iter()
        .map(|s| s.as_ref().parse::<VBParamsOverride>())
        .collect::<Result<Vec<_>, _>>()?;
    for o in &overrides {
        o.apply(params);
    }
    Ok(())
}
