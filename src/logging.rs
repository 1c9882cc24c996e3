//! Logging setup
//!
//! Library code logs through `tracing`; the binary installs a `fmt`
//! subscriber writing to stderr.

use tracing::subscriber::NoSubscriber;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run `f` with logging switched off on this thread
///
/// Used while the TUI owns the terminal: anything written to stderr would be
/// drawn over the alternate screen.
pub fn silenced<T>(f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(NoSubscriber::default(), f)
}


#[cfg(test)]
mod tests {
    use super::capture::warnings_logged_by;
    use super::*;

    #[test]
    fn capture_sees_warnings_only() {
        let logged = warnings_logged_by(|| {
            tracing::info!("not shown");
            tracing::warn!("shown");
        });
        assert!(logged.contains("WARN"));
        assert!(logged.contains("shown"));
        assert!(!logged.contains("not shown"));
    }

    #[test]
    fn silenced_drops_everything() {
        let logged = warnings_logged_by(|| {
            silenced(|| tracing::warn!("hidden"));
        });
        assert!(logged.is_empty());
    }
}
