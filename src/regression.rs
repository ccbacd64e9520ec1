//! Least-squares fit of a line `y = b0 + b1·x` via the normal equation.
//!
//! The design matrix always has exactly two columns, `[1, x]`,
//! so the normal matrix is 2×2 and is inverted in closed form.

use itertools::Itertools;
use statrs::statistics::Statistics;

use crate::prelude::*;

/// Rounding error of the determinant, in machine epsilons per observation relative to `n·Sxx`.
/// Anything below that bound is indistinguishable from a singular normal matrix.
pub const DEGENERACY_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Fitted line coefficients.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Model {
    /// `b0`.
    pub intercept: f64,

    /// `b1`.
    pub slope: f64,
}

impl Model {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Sums over the observations, accumulated left to right.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
struct Sums {
    n: f64,
    x: f64,
    xx: f64,
    y: f64,
    xy: f64,
}

impl Sums {
    fn accumulate(xs: &[f64], ys: &[f64]) -> Self {
        xs.iter().zip_eq(ys).fold(Self::default(), |sums, (x, y)| Self {
            n: sums.n + 1.0,
            x: sums.x + x,
            xx: sums.xx + x * x,
            y: sums.y + y,
            xy: sums.xy + x * y,
        })
    }

    /// Determinant of the normal matrix `[[n, Sx], [Sx, Sxx]]`.
    fn determinant(&self) -> f64 {
        self.n * self.xx - self.x * self.x
    }
}

/// Fits the line minimizing `Σ(y_i − (b0 + b1·x_i))²`.
///
/// A single observation, or any set of identical `x` values,
/// yields [`Error::DegenerateInput`] instead of infinite coefficients.
#[tracing::instrument(level = "debug", skip_all, fields(n = xs.len()))]
pub fn fit(xs: &[f64], ys: &[f64]) -> StdResult<Model, Error> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            independent: xs.len(),
            dependent: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let sums = Sums::accumulate(xs, ys);
    let determinant = sums.determinant();
    if determinant.abs() <= DEGENERACY_TOLERANCE * sums.n * (sums.n * sums.xx).abs() {
        tracing::debug!(determinant, "singular normal matrix");
        return Err(Error::DegenerateInput { determinant });
    }

    let inverse_determinant = 1.0 / determinant;
    let inverse = [
        [inverse_determinant * sums.xx, inverse_determinant * -sums.x],
        [inverse_determinant * -sums.x, inverse_determinant * sums.n],
    ];
    Ok(Model {
        intercept: inverse[0][0] * sums.y + inverse[0][1] * sums.xy,
        slope: inverse[1][0] * sums.y + inverse[1][1] * sums.xy,
    })
}

/// Goodness of a fitted model on the data it was fitted to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Report {
    pub n_observations: usize,
    pub model: Model,

    /// Coefficient of determination.
    /// `None` when the dependent values have no variance.
    pub r_squared: Option<f64>,
}

impl Report {
    #[must_use]
    pub fn new(model: Model, xs: &[f64], ys: &[f64]) -> Self {
        let mean = ys.iter().mean();
        let total: f64 = ys.iter().map(|y| (y - mean).powi(2)).sum();
        let residual: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| (y - model.predict(*x)).powi(2))
            .sum();
        Self {
            n_observations: ys.len(),
            model,
            r_squared: (total > 0.0).then(|| 1.0 - residual / total),
        }
    }
}
