use crate::collector::Series;
use crate::prelude::*;
use crate::regression::{fit, Model, Report};

/// Paired observations, valid by construction: equal lengths, at least one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    independent: Series,
    dependent: Series,
}

impl Dataset {
    pub fn new(independent: Series, dependent: Series) -> StdResult<Self, Error> {
        match (independent.values.len(), dependent.values.len()) {
            (independent, dependent) if independent != dependent => {
                Err(Error::DatasetSizeMismatch {
                    independent,
                    dependent,
                })
            }
            (0, _) => Err(Error::EmptyInput),
            _ => Ok(Self {
                independent,
                dependent,
            }),
        }
    }

    #[must_use]
    pub fn independent(&self) -> &Series {
        &self.independent
    }

    #[must_use]
    pub fn dependent(&self) -> &Series {
        &self.dependent
    }

    #[must_use]
    pub fn n_observations(&self) -> usize {
        self.independent.values.len()
    }

    pub fn fit(&self) -> StdResult<Model, Error> {
        fit(&self.independent.values, &self.dependent.values)
    }

    #[must_use]
    pub fn report(&self, model: Model) -> Report {
        Report::new(model, &self.independent.values, &self.dependent.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, values: &[f64]) -> Series {
        Series {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn new_ok() -> Result {
        let dataset = Dataset::new(series("x", &[1.0, 2.0]), series("y", &[3.0, 4.0]))?;
        assert_eq!(dataset.n_observations(), 2);
        assert_eq!(dataset.independent().name, "x");
        assert_eq!(dataset.dependent().name, "y");
        Ok(())
    }

    #[test]
    fn size_mismatch_error() {
        let result = Dataset::new(series("x", &[1.0, 2.0, 3.0]), series("y", &[1.0, 2.0]));
        assert_eq!(
            result,
            Err(Error::DatasetSizeMismatch {
                independent: 3,
                dependent: 2,
            }),
        );
    }

    #[test]
    fn empty_error() {
        let result = Dataset::new(series("x", &[]), series("y", &[]));
        assert_eq!(result, Err(Error::EmptyInput));
    }
}
