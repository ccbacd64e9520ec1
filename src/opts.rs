//! CLI options.
//!
//! They only configure logging and error reporting,
//! the session itself is driven entirely through the standard input.

use std::str::FromStr;

use clap::Parser;

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN, error reporting is disabled when omitted
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry (0.0..=1.0)
    #[arg(
        long,
        default_value = "0",
        env = "SENTRY_TRACES_SAMPLE_RATE",
        value_parser = sample_rate,
    )]
    pub traces_sample_rate: f32,
}

fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        _ => Err(anyhow!("expected a number from 0.0 to 1.0")),
    }
}
