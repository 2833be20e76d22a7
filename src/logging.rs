// Diagnostic logging. Events go to stderr only; nothing is persisted.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set. Kept at `warn` so the form stays
/// readable.
pub const DEFAULT_FILTER: &str = "crystalia_cli=warn,crystalia=warn";

/// Install the global tracing subscriber. Calling it twice is harmless: the
/// second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
