use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Call once at startup, before building an [`crate::AppContext`].
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("maipal=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
