//! Subscriber setup: a provisional filter first, the configured level once loaded.

use tracing::warn;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    reload, EnvFilter, Registry,
};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Build the subscriber, filtered by `RUST_LOG` or `info`.
///
/// The returned handle swaps in the configured level via [`apply_log_level`].
pub fn subscriber<W>(make_writer: W) -> (impl tracing::Subscriber + Send + Sync, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let initial = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(initial);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Switch to the configured `level`. `RUST_LOG`, when set, keeps precedence.
pub fn apply_log_level(handle: &FilterHandle, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!("failed to apply log level {level:?}: {e}");
            }
        }
        Err(e) => warn!("invalid log_level {level:?}, keeping default: {e}"),
    }
}
