use std::fmt;

use serde::{Deserialize, Serialize};

use super::iso_exponential::IsoExponential;
use super::iso_gaussian::IsoGaussian;
use super::iso_spherical::IsoSpherical;
use super::parameters::VariogramParameters;
use super::IsoVariogramModel;
use crate::error::Result;

/// Theoretical model shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    #[default]
    Spherical,
    Exponential,
    Gaussian,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 3] = [
        ModelFamily::Spherical,
        ModelFamily::Exponential,
        ModelFamily::Gaussian,
    ];

    pub fn with_parameters(self, params: VariogramParameters) -> Result<IsoVariogramType> {
        Ok(match self {
            ModelFamily::Spherical => IsoVariogramType::Spherical(IsoSpherical::new(params)?),
            ModelFamily::Exponential => {
                IsoVariogramType::Exponential(IsoExponential::new(params)?)
            }
            ModelFamily::Gaussian => IsoVariogramType::Gaussian(IsoGaussian::new(params)?),
        })
    }

    pub(crate) fn unchecked(self, params: VariogramParameters) -> IsoVariogramType {
        match self {
            ModelFamily::Spherical => IsoVariogramType::Spherical(IsoSpherical { params }),
            ModelFamily::Exponential => IsoVariogramType::Exponential(IsoExponential { params }),
            ModelFamily::Gaussian => IsoVariogramType::Gaussian(IsoGaussian { params }),
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Spherical => write!(f, "spherical"),
            ModelFamily::Exponential => write!(f, "exponential"),
            ModelFamily::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// A validated model of any family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoVariogramType {
    Spherical(IsoSpherical),
    Exponential(IsoExponential),
    Gaussian(IsoGaussian),
}

impl IsoVariogramType {
    pub fn family(&self) -> ModelFamily {
        match self {
            IsoVariogramType::Spherical(_) => ModelFamily::Spherical,
            IsoVariogramType::Exponential(_) => ModelFamily::Exponential,
            IsoVariogramType::Gaussian(_) => ModelFamily::Gaussian,
        }
    }

    pub fn parameters(&self) -> VariogramParameters {
        match self {
            IsoVariogramType::Spherical(v) => v.params,
            IsoVariogramType::Exponential(v) => v.params,
            IsoVariogramType::Gaussian(v) => v.params,
        }
    }
}

impl IsoVariogramModel for IsoVariogramType {
    fn c_0(&self) -> f64 {
        match self {
            IsoVariogramType::Spherical(v) => v.c_0(),
            IsoVariogramType::Exponential(v) => v.c_0(),
            IsoVariogramType::Gaussian(v) => v.c_0(),
        }
    }

    fn variogram(&self, h: f64) -> f64 {
        match self {
            IsoVariogramType::Spherical(v) => v.variogram(h),
            IsoVariogramType::Exponential(v) => IsoVariogramModel::variogram(v, h),
            IsoVariogramType::Gaussian(v) => IsoVariogramModel::variogram(v, h),
        }
    }
}
