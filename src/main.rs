mod collector;
mod dataset;
mod error;
mod opts;
mod prelude;
mod prompts;
mod regression;
mod session;
mod source;
mod tracing;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;
use crate::session::Session;
use crate::source::LineSource;

fn main() -> Result<ExitCode> {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;

    let outcome = Session::new(LineSource::new(io::stdin().lock()), io::stdout().lock()).run()?;
    if let session::Outcome::Rejected(error) = &outcome {
        ::tracing::warn!(%error, "the session has been rejected");
    }
    Ok(ExitCode::from(outcome.exit_code()))
}
