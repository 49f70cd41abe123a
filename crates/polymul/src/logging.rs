//! Tracing subscriber setup for the command-line front end.

use std::io::{self, IsTerminal};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Installs a formatted subscriber writing to stderr.
///
/// Standard output is left to results so it can be piped. Colours are
/// only used when stderr is a terminal.
///
/// # Errors
///
/// Returns [`LoggingError`] if `filter` is not a valid directive or a
/// subscriber is already installed.
pub fn init_logging(filter: &str) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!(filter, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(
            init_logging("polymul=notalevel"),
            Err(LoggingError::Filter(_))
        ));
    }
}
