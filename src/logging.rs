//! Tracing subscriber setup for the binary.
//!
//! Events go to stderr; stdout carries only command results.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PWCRYPT_LOG";

/// Pick the filter directive: `PWCRYPT_LOG`, then `--verbose`, then the
/// configured level.
pub fn resolve_filter(env_value: Option<&str>, verbose: bool, configured: &str) -> EnvFilter {
    if let Some(directive) = env_value {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return filter;
        }
    }

    if verbose {
        return EnvFilter::new("debug");
    }

    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. A second call is a no-op.
///
/// ANSI colors are used only when `color` is set and stderr is a terminal.
pub fn init(verbose: bool, configured: &str, color: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = resolve_filter(env_value.as_deref(), verbose, configured);
    let ansi = color && std::io::stderr().is_terminal();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .compact()
        .try_init();
}
