// SPDX-License-Identifier: CC0-1.0

//! Errors
//!
//! The crate-level error, wrapping the error of whichever step of chain
//! selection failed.
//!

use std::{error, fmt};

use crate::chainparams::IntegrityError;
use crate::consensus::vbparams::VBParamsError;
use crate::network::constants::ParseNetworkError;

/// An error selecting or building chain parameters.
#[derive(Debug)]
pub enum Error {
    /// Unknown network tag.
    Network(ParseNetworkError),
    /// Invalid `-vbparams` value.
    VBParams(VBParamsError),
    /// The compiled-in constants are inconsistent.
    Integrity(IntegrityError),
    /// More than one network was requested.
    ConflictingChainFlags,
    /// Chain parameters were read before a network was selected.
    NotSelected,
}

impl Error {
    /// Whether the error is a fault of the program rather than of its
    /// configuration. A node cannot continue after a fatal error.
    pub fn is_fatal(&self) -> bool {
        match *self {
            Error::Integrity(_) | Error::NotSelected => true,
            Error::Network(_) | Error::VBParams(_) | Error::ConflictingChainFlags => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Network(ref e) => fmt::Display::fmt(e, f),
            Error::VBParams(ref e) => fmt::Display::fmt(e, f),
            Error::Integrity(ref e) => write!(f, "chain parameters are inconsistent: {}", e),
            Error::ConflictingChainFlags => f.write_str("invalid combination of -regtest, -testnet and -chain"),
            Error::NotSelected => f.write_str("chain parameters used before a network was selected"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Network(ref e) => Some(e),
            Error::VBParams(ref e) => Some(e),
            Error::Integrity(ref e) => Some(e),
            Error::ConflictingChainFlags | Error::NotSelected => None,
        }
    }
}

#[doc(hidden)]
impl From<ParseNetworkError> for Error {
    fn from(e: ParseNetworkError) -> Error {
        Error::Network(e)
    }
}

#[doc(hidden)]
impl From<VBParamsError> for Error {
    fn from(e: VBParamsError) -> Error {
        Error::VBParams(e)
    }
}

#[doc(hidden)]
impl From<IntegrityError> for Error {
    fn from(e: IntegrityError) -> Error {
        Error::Integrity(e)
    }
}
