//! Logging init: stderr subscriber, filter chosen by the CLI toggle.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// `enabled` picks the default filter: progress-level events when on,
/// warnings only when off. `RUST_LOG` overrides either choice. A second
/// call is a no-op; the first subscriber stays installed.
pub fn init_logging(enabled: bool) {
    let default_directives = if enabled { "info,tfd_core=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        // .init() would panic on the second call.
        init_logging(true);
        init_logging(false);
        init_logging(true);
    }
}
