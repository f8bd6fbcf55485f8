use crate::error::{Error, Result};

use super::parameters::VariogramParameters;
use super::IsoVariogramModel;

/// Isotropic spherical model.
///
/// ```text
/// γ(h) = c₀ + (c - c₀)·[1.5(h/a) - 0.5(h/a)³]   h < a
/// γ(h) = c                                        h ≥ a
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoSpherical {
    pub params: VariogramParameters,
}

impl IsoSpherical {
    pub fn new(params: VariogramParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline(always)]
    pub fn variogram(&self, h: f64) -> f64 {
        let VariogramParameters {
            nugget,
            sill,
            range,
        } = self.params;

        if h < range {
            let hr = h / range;
            return nugget + (sill - nugget) * (1.5 * hr - 0.5 * hr * hr * hr);
        }
        sill
    }

    pub fn covariogram(&self, h: f64) -> f64 {
        self.params.sill - self.variogram(h)
    }
}

impl IsoVariogramModel for IsoSpherical {
    fn c_0(&self) -> f64 {
        self.params.sill
    }

    fn variogram(&self, h: f64) -> f64 {
        IsoSpherical::variogram(self, h)
    }
}

/// Semivariance of the spherical model at `distance`.
///
/// Fails with [`Error::InvalidParameter`] for an invalid parameter set or a
/// negative distance.
pub fn evaluate_spherical(distance: f64, params: &VariogramParameters) -> Result<f64> {
    params.validate()?;
    check_distance(distance)?;
    Ok(IsoSpherical { params: *params }.variogram(distance))
}

pub(crate) fn check_distance(distance: f64) -> Result<()> {
    if !(distance >= 0.0) {
        return Err(Error::invalid("distance", distance, "must be non-negative"));
    }
    Ok(())
}
