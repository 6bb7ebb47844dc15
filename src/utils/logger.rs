use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes a global tracing subscriber filtered by `RUST_LOG`
///
/// Intended for binaries and examples; libraries embedding this client
/// should install their own subscriber instead. Calling this twice panics,
/// as only one global subscriber can be registered.
pub fn setup_logger() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
