//! Collects a named numeric series from a sentinel-terminated token stream.

use std::str::FromStr;

use crate::prelude::*;
use crate::source::TokenSource;

/// Ends the series being collected.
pub const END_OF_SERIES: &str = ".";

/// Ends the whole session, recognized at every prompt.
pub const ABORT: &str = "!";

/// Ordered values of a single variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, PartialEq)]
pub enum Collection {
    Complete(Series),

    /// The abort sentinel was seen, or the input ended.
    Aborted,
}

pub struct Collector {
    name: String,
    values: Vec<f64>,
    end_of_series: &'static str,

    /// Index of the next token within this series.
    position: usize,
}

impl Collector {
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            end_of_series: END_OF_SERIES,
            position: 0,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn end_of_series(mut self, sentinel: &'static str) -> Self {
        self.end_of_series = sentinel;
        self
    }

    /// Consumes tokens until the end-of-series or abort sentinel.
    ///
    /// An unparseable token fails with [`Error::Parse`]. The values accepted so far are kept,
    /// and the next call resumes the collection right after the rejected token.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.name.as_str()))]
    pub fn collect(&mut self, source: &mut impl TokenSource) -> Result<Collection> {
        loop {
            let token = match source.next_token()? {
                Some(token) if token == ABORT => return Ok(Collection::Aborted),
                Some(token) => token,
                None => {
                    tracing::debug!("input ended");
                    return Ok(Collection::Aborted);
                }
            };
            if token == self.end_of_series {
                tracing::debug!(n_values = self.values.len(), "collected");
                return Ok(Collection::Complete(Series {
                    name: self.name.clone(),
                    values: std::mem::take(&mut self.values),
                }));
            }

            let position = self.position;
            self.position += 1;
            self.values.push(parse_value(&token, position)?);
        }
    }
}

/// Parses a finite number, unlike `atof` never falling back to zero.
pub fn parse_value(token: &str, position: usize) -> StdResult<f64, Error> {
    match f64::from_str(token) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Parse {
            token: token.to_string(),
            position,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::source::LineSource;

    fn source(input: &str) -> LineSource<Cursor<String>> {
        LineSource::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn collect_ok() -> Result {
        let mut collector = Collector::new("height");
        let collection = collector.collect(&mut source("1\n2\n3\n.\n"))?;
        assert_eq!(
            collection,
            Collection::Complete(Series {
                name: "height".to_string(),
                values: vec![1.0, 2.0, 3.0],
            }),
        );
        Ok(())
    }

    #[test]
    fn collect_empty_ok() -> Result {
        let collection = Collector::new("height").collect(&mut source(".\n"))?;
        match collection {
            Collection::Complete(series) => assert!(series.values.is_empty()),
            Collection::Aborted => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn leading_sentinel_character_is_a_number() -> Result {
        let collection = Collector::new("x").collect(&mut source(".5\n-1\n!5\n"));
        let error = collection.unwrap_err().downcast::<Error>()?;
        assert_eq!(
            error,
            Error::Parse {
                token: "!5".to_string(),
                position: 2,
            },
        );
        Ok(())
    }

    #[test]
    fn parse_error_then_resume_ok() -> Result {
        let mut source = source("1\nabc\n2\n.\n");
        let mut collector = Collector::new("x");

        let error = collector.collect(&mut source).unwrap_err().downcast::<Error>()?;
        assert_eq!(
            error,
            Error::Parse {
                token: "abc".to_string(),
                position: 1,
            },
        );

        match collector.collect(&mut source)? {
            Collection::Complete(series) => assert_eq!(series.values, [1.0, 2.0]),
            Collection::Aborted => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn abort_ok() -> Result {
        let collection = Collector::new("x").collect(&mut source("1\n!\n2\n.\n"))?;
        assert_eq!(collection, Collection::Aborted);
        Ok(())
    }

    #[test]
    fn input_ended_aborts() -> Result {
        let collection = Collector::new("x").collect(&mut source("1\n2\n"))?;
        assert_eq!(collection, Collection::Aborted);
        Ok(())
    }

    #[test]
    fn custom_end_of_series_ok() -> Result {
        let mut collector = Collector::new("x").end_of_series("end");
        match collector.collect(&mut source("1\n.\n")) {
            Err(error) => assert!(matches!(error.downcast::<Error>()?, Error::Parse { .. })),
            Ok(_) => unreachable!(),
        }
        match collector.collect(&mut source("2\nend\n"))? {
            Collection::Complete(series) => assert_eq!(series.values, [1.0, 2.0]),
            Collection::Aborted => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(parse_value("NaN", 0).is_err());
        assert!(parse_value("inf", 0).is_err());
        assert_eq!(parse_value("1e3", 0), Ok(1000.0));
    }
}
