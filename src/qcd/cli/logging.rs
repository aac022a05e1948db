use qcd::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. `QCD_LOG` takes any `EnvFilter` directive;
/// without it, `--verbose` turns on debug events from qcd itself.
pub(super) fn init(verbose: bool) {
    let fallback = if verbose { "qcd=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
