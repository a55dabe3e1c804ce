//! Logging setup for the namegoto binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing with the default filter.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format on stderr, keeping stdout for results
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    tracing_subscriber::registry()
        .with(filter(default_filter))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(DEFAULT_FILTER, "info");
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
