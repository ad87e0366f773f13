//! # Tracing Setup
//!
//! Installs the global tracing subscriber. Production deployments emit
//! Bunyan-formatted JSON so log collectors can parse them; every other
//! environment gets the human-readable `fmt` output.

use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{
    EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::AppEnv;
use crate::utils::constant::DEFAULT_LOG_FILTER;

/// Builds the subscriber for `app_env`, writing to `sink`.
pub fn get_subscriber<Sink>(
    app_env: AppEnv,
    env_filter: EnvFilter,
    sink: Sink,
) -> Box<dyn Subscriber + Send + Sync>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match app_env {
        AppEnv::Production => {
            let formatting_layer = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), sink);
            Box::new(
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(JsonStorageLayer)
                    .with(formatting_layer),
            )
        }
        AppEnv::Development => Box::new(
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(sink)),
        ),
    }
}

/// Initializes the global subscriber on stdout. Must be called at most once per process.
///
/// The filter is taken from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_subscriber(app_env: AppEnv) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    get_subscriber(app_env, env_filter, std::io::stdout).init();
}
