// SPDX-License-Identifier: CC0-1.0

//! Chain selection arguments
//!
//! The subset of node startup options that decide which network to run and
//! how to tweak its deployments.
//!

use crate::error::Error;

/// Startup options that select and configure the chain.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainArgs {
    /// `-testnet`: use the public test network.
    pub testnet: bool,
    /// `-regtest`: use a local regression-test chain.
    pub regtest: bool,
    /// `-chain=<tag>`: the network tag to use.
    pub chain: Option<String>,
    /// `-vbparams=<deployment>:<start>:<end>` values, in the order given.
    pub vbparams: Vec<String>,
}

impl ChainArgs {
    /// Collects chain options from command line style arguments.
    ///
    /// Options may start with one or two dashes and `-flag=0` turns a flag
    /// off. Later values override earlier ones, except `-vbparams` which
    /// accumulates; a bare `-vbparams` is kept as an empty value so that it
    /// is rejected when the overrides are applied. Everything else is ignored.
    pub fn from_args<I, S>(args: I) -> ChainArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ret = ChainArgs::default();
        for arg in args {
            let arg = arg.as_ref();
            let opt = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
                Some(opt) => opt,
                None => continue,
            };
            let (key, value) = match opt.find('=') {
                Some(i) => (&opt[..i], Some(&opt[i + 1..])),
                None => (opt, None),
            };
            match key {
                "testnet" => ret.testnet = flag_value(value),
                "regtest" => ret.regtest = flag_value(value),
                "chain" => ret.chain = value.map(str::to_owned),
                "vbparams" => ret.vbparams.push(value.unwrap_or("").to_owned()),
                _ => {}
            }
        }
        ret
    }

    /// The network tag these options select, `main` when none is given.
    ///
    /// Asking for more than one network is an error.
    pub fn network_tag(&self) -> Result<&str, Error> {
        let mut selected = Vec::with_capacity(3);
        if self.testnet {
            selected.push("test");
        }
        if self.regtest {
            selected.push("regtest");
        }
        if let Some(ref chain) = self.chain {
            selected.push(chain.as_str());
        }
        match selected.len() {
            0 => Ok("main"),
            1 => Ok(selected[0]),
            _ => Err(Error::ConflictingChainFlags),
        }
    }
}

fn flag_value(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v != "0",
    }
}
