//! Run configuration from environment variables.

use std::env;

use polymul_poly::algorithms::DEFAULT_THRESHOLD;

use crate::strategy::Strategy;

/// Configuration for a multiplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Algorithms to run
    pub strategy: Strategy,

    /// Base-case size of the block-recursive algorithm
    pub threshold: usize,

    /// Report block-recursive products at their true degree
    pub trim: bool,

    /// Zero-extend the smaller operand when degrees differ
    pub pad_unequal: bool,

    /// Print wall-clock time of each multiplication
    pub timing: bool,

    /// Log filter (trace, debug, info, warn, error, or a full directive)
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Both,
            threshold: DEFAULT_THRESHOLD,
            trim: false,
            pad_unequal: false,
            timing: false,
            log_level: "warn".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl RunConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `POLYMUL_STRATEGY`: direct, block or both (default: both)
    /// - `POLYMUL_THRESHOLD`: block-recursive base-case size (default: 1)
    /// - `POLYMUL_TRIM`: trim block products to their true degree (default: false)
    /// - `POLYMUL_PAD_UNEQUAL`: pad unequal operands (default: false)
    /// - `POLYMUL_TIMING`: print timings (default: false)
    /// - `POLYMUL_LOG_LEVEL` or `RUST_LOG`: log filter (default: warn)
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            strategy: lookup("POLYMUL_STRATEGY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.strategy),

            threshold: lookup("POLYMUL_THRESHOLD")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&t| t > 0)
                .unwrap_or(defaults.threshold),

            trim: lookup("POLYMUL_TRIM")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.trim),

            pad_unequal: lookup("POLYMUL_PAD_UNEQUAL")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.pad_unequal),

            timing: lookup("POLYMUL_TIMING")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.timing),

            log_level: lookup("POLYMUL_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    }
}
