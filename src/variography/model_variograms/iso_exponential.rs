use super::parameters::VariogramParameters;
use super::IsoVariogramModel;
use crate::error::Result;

/// Isotropic exponential model with practical range `a`:
/// `γ(h) = c₀ + (c - c₀)·[1 - exp(-3h/a)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoExponential {
    pub params: VariogramParameters,
}

impl IsoExponential {
    pub fn new(params: VariogramParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl IsoVariogramModel for IsoExponential {
    fn c_0(&self) -> f64 {
        self.params.sill
    }

    fn variogram(&self, h: f64) -> f64 {
        let p = &self.params;
        p.nugget + p.partial_sill() * (1.0 - (-3.0 * h / p.range).exp())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reaches_95_percent_at_range() {
        let model = IsoExponential::new(VariogramParameters::new(0.0, 10.0, 30.0).unwrap()).unwrap();

        assert_eq!(model.variogram(0.0), 0.0);
        assert_relative_eq!(model.variogram(30.0), 10.0 * (1.0 - (-3f64).exp()));
        assert!(model.variogram(30.0) > 9.5);
        assert!(model.variogram(300.0) < 10.0 + 1e-12);
    }
}
