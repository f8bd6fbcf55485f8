use super::parameters::VariogramParameters;
use super::IsoVariogramModel;
use crate::error::Result;

/// Isotropic Gaussian model with practical range `a`:
/// `γ(h) = c₀ + (c - c₀)·[1 - exp(-3h²/a²)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoGaussian {
    pub params: VariogramParameters,
}

impl IsoGaussian {
    pub fn new(params: VariogramParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl IsoVariogramModel for IsoGaussian {
    fn c_0(&self) -> f64 {
        self.params.sill
    }

    fn variogram(&self, h: f64) -> f64 {
        let p = &self.params;
        p.nugget + p.partial_sill() * (1.0 - (-3.0 * h * h / (p.range * p.range)).exp())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parabolic_near_origin() {
        let model = IsoGaussian::new(VariogramParameters::new(1.0, 11.0, 20.0).unwrap()).unwrap();

        assert_eq!(model.variogram(0.0), 1.0);
        // flatter than linear close to the origin
        assert!(model.variogram(1.0) - 1.0 < 10.0 * 3.0 / 20.0 * 0.1);
        assert_relative_eq!(model.variogram(20.0), 1.0 + 10.0 * (1.0 - (-3f64).exp()));
        assert_relative_eq!(model.covariogram(20.0), 11.0 - model.variogram(20.0));
    }
}
