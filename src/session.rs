//! Interactive session: collects the two series, then answers prediction queries.

use std::io::Write;

use crate::collector::{parse_value, Collection, Collector, Series, ABORT};
use crate::dataset::Dataset;
use crate::prelude::*;
use crate::prompts;
use crate::regression::Model;
use crate::source::TokenSource;

/// Shows the directions, only at the very first prompt.
pub const HELP: &str = "?";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    NamingIndependent,
    CollectingIndependentData,
    NamingDependent,
    CollectingDependentData,
    Validating,
    Predicting,
    Terminated,
}

/// How a session has ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user asked to stop, or the input ended.
    Stopped,

    /// The collected data cannot produce a model.
    Rejected(Error),
}

impl Outcome {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Stopped => 0,
            Self::Rejected(_) => 1,
        }
    }
}

enum State {
    NamingIndependent {
        prompt: &'static str,
    },
    CollectingIndependentData(Collector),
    NamingDependent {
        independent: Series,
    },
    CollectingDependentData {
        independent: Series,
        collector: Collector,
    },
    Validating {
        independent: Series,
        dependent: Series,
    },
    Predicting {
        dataset: Dataset,

        /// Fitted on the first probe, the dataset never changes afterwards.
        model: Option<Model>,

        n_probes: usize,
    },
    Terminated(Outcome),
}

impl State {
    const fn phase(&self) -> Phase {
        match self {
            Self::NamingIndependent { .. } => Phase::NamingIndependent,
            Self::CollectingIndependentData(_) => Phase::CollectingIndependentData,
            Self::NamingDependent { .. } => Phase::NamingDependent,
            Self::CollectingDependentData { .. } => Phase::CollectingDependentData,
            Self::Validating { .. } => Phase::Validating,
            Self::Predicting { .. } => Phase::Predicting,
            Self::Terminated(_) => Phase::Terminated,
        }
    }
}

pub struct Session<S, W> {
    source: S,
    output: W,
}

impl<S: TokenSource, W: Write> Session<S, W> {
    pub fn new(source: S, output: W) -> Self {
        Self { source, output }
    }

    /// Drives the session until it terminates.
    ///
    /// Only input and output failures are returned as errors,
    /// the data problems are reported to the user and end up in the [`Outcome`].
    pub fn run(&mut self) -> Result<Outcome> {
        let mut state = State::NamingIndependent {
            prompt: prompts::INDEPENDENT_NAME,
        };
        loop {
            let phase = state.phase();
            state = match self.step(state)? {
                State::Terminated(outcome) => {
                    tracing::info!(?outcome, "terminated");
                    return Ok(outcome);
                }
                state => {
                    if phase != state.phase() {
                        tracing::debug!(from = ?phase, to = ?state.phase(), "transition");
                    }
                    state
                }
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State> {
        let state = match state {
            State::NamingIndependent { prompt } => match self.ask(prompt)? {
                None => State::Terminated(Outcome::Stopped),
                Some(token) if token == HELP => {
                    self.say(prompts::HELP)?;
                    State::NamingIndependent {
                        prompt: prompts::INDEPENDENT_NAME_AGAIN,
                    }
                }
                Some(name) if name.is_empty() => {
                    self.say(prompts::EMPTY_NAME)?;
                    State::NamingIndependent { prompt }
                }
                Some(name) => {
                    self.say(&prompts::data(&name))?;
                    State::CollectingIndependentData(Collector::new(name))
                }
            },

            State::CollectingIndependentData(mut collector) => {
                match self.collect(&mut collector)? {
                    None => State::CollectingIndependentData(collector),
                    Some(Collection::Aborted) => State::Terminated(Outcome::Stopped),
                    Some(Collection::Complete(independent)) => {
                        State::NamingDependent { independent }
                    }
                }
            }

            State::NamingDependent { independent } => match self.ask(prompts::DEPENDENT_NAME)? {
                None => State::Terminated(Outcome::Stopped),
                Some(name) if name.is_empty() => {
                    self.say(prompts::EMPTY_NAME)?;
                    State::NamingDependent { independent }
                }
                Some(name) => {
                    self.say(&prompts::data(&name))?;
                    State::CollectingDependentData {
                        independent,
                        collector: Collector::new(name),
                    }
                }
            },

            State::CollectingDependentData {
                independent,
                mut collector,
            } => match self.collect(&mut collector)? {
                None => State::CollectingDependentData {
                    independent,
                    collector,
                },
                Some(Collection::Aborted) => State::Terminated(Outcome::Stopped),
                Some(Collection::Complete(dependent)) => State::Validating {
                    independent,
                    dependent,
                },
            },

            State::Validating {
                independent,
                dependent,
            } => match Dataset::new(independent, dependent) {
                Ok(dataset) => {
                    tracing::info!(n_observations = dataset.n_observations(), "validated");
                    State::Predicting {
                        dataset,
                        model: None,
                        n_probes: 0,
                    }
                }
                Err(error) => {
                    tracing::info!(%error, "rejected the dataset");
                    self.say(&error.to_string())?;
                    State::Terminated(Outcome::Rejected(error))
                }
            },

            State::Predicting {
                dataset,
                model,
                n_probes,
            } => self.predict(dataset, model, n_probes)?,

            State::Terminated(_) => unreachable!("a terminated session is never stepped"),
        };
        Ok(state)
    }

    /// Answers a single probe.
    fn predict(
        &mut self,
        dataset: Dataset,
        mut model: Option<Model>,
        n_probes: usize,
    ) -> Result<State> {
        let prompt = prompts::predict(&dataset.independent().name, &dataset.dependent().name);
        let token = match self.ask(&prompt)? {
            Some(token) => token,
            None => return Ok(State::Terminated(Outcome::Stopped)),
        };

        match parse_value(&token, n_probes) {
            Ok(x) => {
                model = self.fit_once(&dataset, model)?;
                if let Some(model) = model {
                    let y = model.predict(x);
                    tracing::debug!(x, y, "predicted");
                    self.say(&prompts::prediction(&dataset.dependent().name, y))?;
                }
            }
            Err(error) => {
                tracing::debug!(%error, "rejected the probe");
                self.say(&prompts::rejected(&token))?;
            }
        }

        Ok(State::Predicting {
            dataset,
            model,
            n_probes: n_probes + 1,
        })
    }

    /// Returns the cached model, or fits a new one.
    /// A degenerate dataset is reported to the user and yields `None`.
    fn fit_once(&mut self, dataset: &Dataset, model: Option<Model>) -> Result<Option<Model>> {
        if model.is_some() {
            return Ok(model);
        }
        match dataset.fit() {
            Ok(model) => {
                let report = dataset.report(model);
                tracing::info!(
                    n_observations = report.n_observations,
                    intercept = report.model.intercept,
                    slope = report.model.slope,
                    r_squared = ?report.r_squared,
                    "fitted",
                );
                Ok(Some(model))
            }
            Err(error @ Error::DegenerateInput { .. }) => {
                tracing::info!(%error, "cannot fit");
                self.say(prompts::DEGENERATE)?;
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Collects the next chunk of a series, reporting a rejected token as `None`.
    fn collect(&mut self, collector: &mut Collector) -> Result<Option<Collection>> {
        match collector.collect(&mut self.source) {
            Ok(collection) => Ok(Some(collection)),
            Err(error) => match error.downcast::<Error>() {
                Ok(Error::Parse { token, position }) => {
                    tracing::debug!(token = token.as_str(), position, "rejected the value");
                    self.say(&prompts::rejected(&token))?;
                    Ok(None)
                }
                Ok(error) => Err(error.into()),
                Err(error) => Err(error),
            },
        }
    }

    /// Prompts and reads the response, `None` means that the session should end.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(prompt)?;
        match self.source.next_token()? {
            Some(token) if token == ABORT => Ok(None),
            token => Ok(token),
        }
    }

    fn say(&mut self, text: &str) -> Result {
        writeln!(self.output, "{}", text)?;
        self.output.flush().context("failed to flush the output")
    }
}
