use std::fmt::{Display, Formatter};

/// Domain errors of the fitting and prediction flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The token is neither a sentinel nor a finite number.
    Parse { token: String, position: usize },

    /// The collected series have different lengths.
    DatasetSizeMismatch { independent: usize, dependent: usize },

    /// The normal-equation matrix is singular, so the fit is not unique.
    DegenerateInput { determinant: f64 },

    /// No observations reached the solver.
    EmptyInput,

    /// The solver was called with sequences of different lengths.
    LengthMismatch { independent: usize, dependent: usize },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { token, position } => {
                write!(formatter, "`{}` at position {} is not a number", token, position)
            }
            Self::DatasetSizeMismatch { independent, dependent } => write!(
                formatter,
                "the number of x values must match the number of y values ({} vs {})",
                independent, dependent,
            ),
            Self::DegenerateInput { determinant } => write!(
                formatter,
                "the data does not support a unique fit (determinant {:e})",
                determinant,
            ),
            Self::EmptyInput => formatter.write_str("no observations were provided"),
            Self::LengthMismatch { independent, dependent } => write!(
                formatter,
                "cannot fit {} independent values against {} dependent values",
                independent, dependent,
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_ok() {
        let error = Error::Parse {
            token: "abc".to_string(),
            position: 2,
        };
        assert_eq!(error.to_string(), "`abc` at position 2 is not a number");
    }

    #[test]
    fn downcast_ok() {
        let error = anyhow::Error::new(Error::EmptyInput);
        assert_eq!(error.downcast_ref::<Error>(), Some(&Error::EmptyInput));
    }
}
