use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

const LOG_ENV: &str = "PREDICTION_LOG";
const SENTRY_LOG_ENV: &str = "PREDICTION_SENTRY_LOG";

/// Initialises tracing and Sentry, the latter stays disabled without a DSN.
///
/// Logs are written to the standard error, the standard output belongs to the session.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            traces_sample_rate,
            ..Default::default()
        },
    ));

    tracing_subscriber::Registry::default()
        .with(sentry_layer()?)
        .with(format_layer()?)
        .try_init()
        .context("failed to initialise tracing")?;

    tracing::debug!(sentry_enabled = guard.is_enabled(), "initialised");
    Ok(guard)
}

fn sentry_layer<S>() -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = env_filter(SENTRY_LOG_ENV, "prediction=trace")?;
    Ok(sentry::integrations::tracing::layer()
        .event_filter(|metadata| match *metadata.level() {
            Level::ERROR | Level::WARN => EventFilter::Event,
            _ => EventFilter::Breadcrumb,
        })
        .span_filter(|metadata| *metadata.level() != Level::TRACE)
        .with_filter(filter))
}

fn format_layer<S>() -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = env_filter(LOG_ENV, "prediction=warn")?;
    Ok(tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(filter))
}

fn env_filter(variable: &str, default: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(variable)
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("invalid `{}` directives", variable))
}
