//! Experimental (empirical) semivariogram
//!
//! ```text
//! γ(h) = (1/2N(h)) Σ [z(xᵢ) - z(xⱼ)]²   for all pairs with |xᵢ-xⱼ| in lag h
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod cpu_calculator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagBounds {
    pub lb: f64,
    pub ub: f64,
}

impl LagBounds {
    pub fn new(lb: f64, ub: f64) -> Self {
        Self { lb, ub }
    }

    pub fn mid_point(&self) -> f64 {
        (self.lb + self.ub) / 2f64
    }
}

/// Lag class configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagParameters {
    /// Number of lag classes (default 15)
    pub n_lags: usize,
    /// Width of each class. Defaults to `max_lag / n_lags`.
    pub lag_width: Option<f64>,
    /// Largest separation considered. Defaults to half the largest pairwise
    /// distance of the sample.
    pub max_lag: Option<f64>,
}

impl Default for LagParameters {
    fn default() -> Self {
        Self {
            n_lags: 15,
            lag_width: None,
            max_lag: None,
        }
    }
}

impl LagParameters {
    /// Contiguous lag classes `[k·w, (k+1)·w)` given the sample's largest
    /// pairwise distance.
    pub fn lag_bounds(&self, max_distance: f64) -> Result<Vec<LagBounds>> {
        if self.n_lags == 0 {
            return Err(Error::invalid("n_lags", 0.0, "must be at least one"));
        }

        let width = match (self.lag_width, self.max_lag) {
            (Some(w), _) => w,
            (None, Some(max_lag)) => max_lag / self.n_lags as f64,
            (None, None) => max_distance / 2.0 / self.n_lags as f64,
        };
        if !(width > 0.0) || !width.is_finite() {
            return Err(Error::invalid("lag_width", width, "must be positive"));
        }

        Ok((0..self.n_lags)
            .map(|k| LagBounds::new(k as f64 * width, (k + 1) as f64 * width))
            .collect())
    }
}

/// Binned semivariance. Lags without pairs carry `NaN` and a zero count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalVariogram {
    pub lags: Vec<LagBounds>,
    pub semivariance: Vec<f64>,
    pub counts: Vec<u32>,
}

impl ExperimentalVariogram {
    pub fn mid_points(&self) -> Vec<f64> {
        self.lags.iter().map(|l| l.mid_point()).collect()
    }

    /// `(lag mid point, semivariance, count)` of every lag holding pairs.
    pub fn valid_lags(&self) -> impl Iterator<Item = (f64, f64, u32)> + '_ {
        self.lags
            .iter()
            .zip(self.semivariance.iter())
            .zip(self.counts.iter())
            .filter(|((_, sv), cnt)| **cnt > 0 && sv.is_finite())
            .map(|((lag, &sv), &cnt)| (lag.mid_point(), sv, cnt))
    }
}
