// SPDX-License-Identifier: CC0-1.0

//! Network constants
//!
//! The term "network" is overloaded, here [`Network`] refers to the chain
//! we are operating on: production, the public test network, or a local
//! regression-test chain. Each variant has a stable string tag used to
//! select it at startup.
//!
//! # Example: selecting a network by tag
//!
//! ```rust
//! use chainparams::network::constants::Network;
//!
//! let network: Network = "regtest".parse().unwrap();
//! assert_eq!(network, Network::Regtest);
//! assert!("fakenet".parse::<Network>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

/// The network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Network {
    /// The production network
    #[cfg_attr(feature = "serde", serde(rename = "main"))]
    Main,
    /// The public test network
    #[cfg_attr(feature = "serde", serde(rename = "test"))]
    Testnet,
    /// The local regression-test network
    #[cfg_attr(feature = "serde", serde(rename = "regtest"))]
    Regtest,
}

impl Network {
    /// Every network, in selection order.
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    /// Converts a `Network` to its `-chain` argument name.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Converts a `-chain` argument name to its equivalent `Network`.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        let network = match core_arg {
            "main" => Network::Main,
            "test" => Network::Testnet,
            "regtest" => Network::Regtest,
            _ => return Err(ParseNetworkError(core_arg.to_owned())),
        };
        Ok(network)
    }

    /// Whether version bits deployment windows may be overridden with
    /// `-vbparams` on this network.
    pub fn accepts_vbparams(self) -> bool {
        self == Network::Regtest
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown chain {}", self.0)
    }
}

impl std::error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_core_arg(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_core_arg())
    }
}

#[cfg(test)]
mod tests {
    use super::{Network, ParseNetworkError};

    #[test]
    fn string_test() {
        assert_eq!(Network::Main.to_string(), "main");
        assert_eq!(Network::Testnet.to_string(), "test");
        assert_eq!(Network::Regtest.to_string(), "regtest");

        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert_eq!("foo".parse::<Network>(), Err(ParseNetworkError("foo".to_owned())));
        // tags are case sensitive
        assert!("Main".parse::<Network>().is_err());
    }

    #[test]
    fn from_to_core_arg() {
        for net in Network::ALL.iter() {
            assert_eq!(Network::from_core_arg(net.to_core_arg()), Ok(*net));
        }
    }

    #[test]
    fn vbparams_capability() {
        assert!(!Network::Main.accepts_vbparams());
        assert!(!Network::Testnet.accepts_vbparams());
        assert!(Network::Regtest.accepts_vbparams());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let tests = vec![(Network::Main, "main"), (Network::Testnet, "test"), (Network::Regtest, "regtest")];

        for (network, tag) in tests {
            let want = format!("\"{}\"", tag);
            let got = serde_json::to_string(&network).expect("failed to serialize network");
            assert_eq!(got, want);

            let back: Network = serde_json::from_str(&got).expect("failed to deserialize network");
            assert_eq!(back, network);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&Network::Main, &[Token::UnitVariant { name: "Network", variant: "main" }]);
        assert_tokens(&Network::Testnet, &[Token::UnitVariant { name: "Network", variant: "test" }]);
        assert_tokens(&Network::Regtest, &[Token::UnitVariant { name: "Network", variant: "regtest" }]);
    }
}
