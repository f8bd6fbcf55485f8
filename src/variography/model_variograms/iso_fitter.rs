use itertools::izip;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rmpfit::{MPConfig, MPFitter, MPPar, MPResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::variography::experimental::ExperimentalVariogram;
use crate::variography::statistics::{derived_statistics, DerivedStatistics};

use super::family::{IsoVariogramType, ModelFamily};
use super::parameters::VariogramParameters;
use super::IsoVariogramModel;

/// Fitting options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    pub family: ModelFamily,
    /// Starting guess. Defaults to a zero nugget, the largest observed
    /// semivariance as sill and half the largest lag as range.
    pub initial: Option<VariogramParameters>,
    /// Additional randomly drawn starting points.
    pub restarts: usize,
    pub seed: u64,
    /// Weight residuals by the square root of the lag's pair count.
    pub weighted: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            family: ModelFamily::Spherical,
            initial: None,
            restarts: 16,
            seed: 42,
            weighted: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedVariogram {
    pub family: ModelFamily,
    pub parameters: VariogramParameters,
    /// Residual sum of squares of the (weighted) fit
    pub rss: f64,
    /// Number of lags the fit was computed on
    pub lags_used: usize,
}

impl FittedVariogram {
    pub fn model(&self) -> Result<IsoVariogramType> {
        self.family.with_parameters(self.parameters)
    }

    pub fn statistics(&self, max_distance: f64) -> Result<DerivedStatistics> {
        derived_statistics(&self.parameters, max_distance)
    }
}

/// Fit a model of `config.family` to an experimental variogram.
pub fn fit_variogram(
    experimental: &ExperimentalVariogram,
    config: &FitConfig,
) -> Result<FittedVariogram> {
    let (lags, semivariance, counts) = experimental.valid_lags().fold(
        (vec![], vec![], vec![]),
        |(mut lags, mut sv, mut counts), (lag, v, c)| {
            lags.push(lag);
            sv.push(v);
            counts.push(c);
            (lags, sv, counts)
        },
    );

    VariogramFitter::new(lags, semivariance, counts)?.fit(config)
}

/// Least-squares problem over `[nugget, partial sill, range]`.
pub struct VariogramFitter {
    pub lags: Vec<f64>,
    pub exp_var: Vec<f64>,
    pub weights: Vec<f64>,
    family: ModelFamily,
    mppar_params: Vec<MPPar>,
}

impl VariogramFitter {
    pub fn new(lags: Vec<f64>, exp_var: Vec<f64>, counts: Vec<u32>) -> Result<Self> {
        if lags.len() != exp_var.len() || lags.len() != counts.len() {
            return Err(Error::InvalidParameter {
                name: "exp_var",
                value: exp_var.len().to_string(),
                reason: format!("expected {} lags and counts", lags.len()),
            });
        }
        if lags.len() < 3 {
            return Err(Error::InsufficientData {
                what: "variogram fit",
                needed: 3,
                found: lags.len(),
            });
        }
        if let Some(bad) = izip!(&lags, &exp_var).find(|(l, v)| !l.is_finite() || !v.is_finite())
        {
            return Err(Error::invalid("lag", *bad.0, "lags and semivariances must be finite"));
        }

        let weights = counts.iter().map(|&c| c as f64).collect();

        Ok(Self {
            lags,
            exp_var,
            weights,
            family: ModelFamily::default(),
            mppar_params: Self::parameter_bounds(),
        })
    }

    fn parameter_bounds() -> Vec<MPPar> {
        let nugget = MPPar {
            limited_low: true,
            limit_low: 0.0,
            ..Default::default()
        };
        let partial_sill = MPPar {
            limited_low: true,
            limit_low: 0.0,
            ..Default::default()
        };
        let range = MPPar {
            limited_low: true,
            limit_low: f64::EPSILON,
            ..Default::default()
        };
        vec![nugget, partial_sill, range]
    }

    fn to_parameters(params: &[f64]) -> VariogramParameters {
        VariogramParameters {
            nugget: params[0],
            sill: params[0] + params[1],
            range: params[2],
        }
    }

    fn default_guess(&self) -> VariogramParameters {
        let max_sv = self
            .exp_var
            .iter()
            .cloned()
            .max_by_key(|v| OrderedFloat(*v))
            .unwrap_or(0.0);
        let max_lag = self
            .lags
            .iter()
            .cloned()
            .max_by_key(|l| OrderedFloat(*l))
            .unwrap_or(1.0);

        VariogramParameters {
            nugget: 0.0,
            sill: max_sv.max(0.0),
            range: (max_lag / 2.0).max(f64::EPSILON),
        }
    }

    /// Weighted residual sum of squares of a candidate parameter set.
    pub fn rss(&self, family: ModelFamily, params: VariogramParameters) -> Result<f64> {
        let model = family.with_parameters(params)?;
        Ok(izip!(&self.lags, &self.exp_var, &self.weights)
            .map(|(&h, &v, &w)| w * (v - model.variogram(h)).powi(2))
            .sum())
    }

    pub fn fit(mut self, config: &FitConfig) -> Result<FittedVariogram> {
        self.family = config.family;
        if !config.weighted {
            self.weights.iter_mut().for_each(|w| *w = 1.0);
        }

        let guess = match config.initial {
            Some(initial) => {
                initial.validate()?;
                initial
            }
            None => self.default_guess(),
        };

        let max_sv = self.default_guess().sill.max(guess.sill).max(f64::EPSILON);
        let max_lag = self
            .lags
            .iter()
            .cloned()
            .fold(guess.range, f64::max)
            .max(2.0 * f64::EPSILON);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut starts = vec![vec![guess.nugget, guess.partial_sill(), guess.range]];
        starts.extend((0..config.restarts).map(|_| {
            let nugget = rng.gen_range(0f64..=max_sv / 2.0);
            let partial_sill = rng.gen_range(0f64..=max_sv);
            let range = rng.gen_range(f64::EPSILON..=max_lag);
            vec![nugget, partial_sill, range]
        }));

        let mp_config = MPConfig::default();
        let n_starts = starts.len();
        let best = starts
            .into_iter()
            .filter_map(|mut start| match self.mpfit(
                start.as_mut_slice(),
                Some(self.mppar_params.as_slice()),
                &mp_config,
            ) {
                Ok(_) => {
                    let params = Self::to_parameters(&start);
                    let rss = self.rss(self.family, params).ok()?;
                    debug!(?params, rss, "optimizer run converged");
                    Some((rss, params))
                }
                Err(e) => {
                    warn!(error = %e, "optimizer run failed");
                    None
                }
            })
            .min_by_key(|(rss, _)| OrderedFloat(*rss))
            .ok_or_else(|| Error::Fit(format!("all {n_starts} optimizer runs failed")))?;

        let (rss, parameters) = best;
        parameters.validate()?;

        info!(
            family = %self.family,
            nugget = parameters.nugget,
            sill = parameters.sill,
            range = parameters.range,
            rss,
            "fitted variogram model"
        );

        Ok(FittedVariogram {
            family: self.family,
            parameters,
            rss,
            lags_used: self.lags.len(),
        })
    }
}

impl MPFitter for VariogramFitter {
    fn eval(&self, params: &[f64], deviates: &mut [f64]) -> MPResult<()> {
        // bounds keep the optimizer inside the valid parameter space
        let model = self.family.unchecked(Self::to_parameters(params));

        for (d, h, v, w) in izip!(
            deviates.iter_mut(),
            self.lags.iter(),
            self.exp_var.iter(),
            self.weights.iter()
        ) {
            *d = w.sqrt() * (v - model.variogram(*h));
        }

        Ok(())
    }

    fn number_of_points(&self) -> usize {
        self.lags.len()
    }
}
