//! Model curves sampled over a set of lag distances
//!
//! A [`DistanceSample`] is the ordered set of distances handed to a model; a
//! [`SemivariogramCurve`] is the parallel series of semivariances a plotting
//! layer draws.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::model_variograms::iso_spherical::{check_distance, IsoSpherical};
use super::model_variograms::parameters::VariogramParameters;
use super::model_variograms::IsoVariogramModel;

/// Non-negative lag distances in caller order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceSample {
    distances: Vec<f64>,
}

impl DistanceSample {
    pub fn new(distances: Vec<f64>) -> Result<Self> {
        for &d in &distances {
            check_distance(d)?;
            if !d.is_finite() {
                return Err(Error::invalid("distance", d, "must be finite"));
            }
        }
        Ok(Self { distances })
    }

    /// `n` evenly spaced distances from `start` to `stop`, both included.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Self> {
        check_distance(start)?;
        if !(stop >= start) || !stop.is_finite() {
            return Err(Error::invalid(
                "stop",
                stop,
                "must be finite and not smaller than start",
            ));
        }

        let distances = match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                    .collect()
            }
        };

        Ok(Self { distances })
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Semivariance at each distance of a [`DistanceSample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemivariogramCurve {
    pub distances: Vec<f64>,
    pub semivariance: Vec<f64>,
}

impl SemivariogramCurve {
    /// Spherical model evaluated at every distance of `sample`.
    pub fn spherical(sample: &DistanceSample, params: &VariogramParameters) -> Result<Self> {
        let model = IsoSpherical::new(*params)?;
        Ok(Self::from_model(sample, &model))
    }

    pub fn from_model<M: IsoVariogramModel>(sample: &DistanceSample, model: &M) -> Self {
        let semivariance = sample
            .distances
            .iter()
            .map(|&h| model.variogram(h))
            .collect();

        Self {
            distances: sample.distances.clone(),
            semivariance,
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.semivariance.iter().copied())
    }
}
