//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with prompts or deck listings.
//! `RUST_LOG` overrides the level chosen by `-v` flags.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter for a `-v` count
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber; later calls do nothing
pub fn init_tracing(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| default_filter(verbosity).to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(env_filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0);
        init_tracing(2);
    }
}
