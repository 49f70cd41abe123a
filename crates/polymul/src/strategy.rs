//! Selection of multiplication strategies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single multiplication algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Direct convolution.
    Direct,
    /// Block-recursive Karatsuba.
    BlockRecursive,
}

impl Method {
    /// Label used in output lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Direct => "Direct",
            Method::BlockRecursive => "Block",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which algorithms to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Direct convolution only.
    Direct,
    /// Block-recursive only.
    Block,
    /// Both, direct first.
    #[default]
    Both,
}

impl Strategy {
    /// The methods to run, in order.
    #[must_use]
    pub fn methods(self) -> &'static [Method] {
        match self {
            Strategy::Direct => &[Method::Direct],
            Strategy::Block => &[Method::BlockRecursive],
            Strategy::Both => &[Method::Direct, Method::BlockRecursive],
        }
    }
}

/// Unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected direct, block or both)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "trivial" => Ok(Strategy::Direct),
            "block" | "karatsuba" => Ok(Strategy::Block),
            "both" => Ok(Strategy::Both),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Direct => "direct",
            Strategy::Block => "block",
            Strategy::Both => "both",
        })
    }
}
