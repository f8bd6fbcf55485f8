use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Nugget, sill and range of an isotropic variogram model.
///
/// Valid parameters satisfy `sill >= nugget >= 0` and `range > 0`. Fields are
/// public so a set can be written as a literal; every evaluation entry point
/// calls [`VariogramParameters::validate`] before using them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariogramParameters {
    pub nugget: f64,
    pub sill: f64,
    pub range: f64,
}

impl VariogramParameters {
    pub fn new(nugget: f64, sill: f64, range: f64) -> Result<Self> {
        let params = Self {
            nugget,
            sill,
            range,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        // negated comparisons so NaN is rejected too
        if !(self.range > 0.0) || !self.range.is_finite() {
            return Err(Error::invalid(
                "range",
                self.range,
                "must be positive and finite",
            ));
        }
        if !(self.nugget >= 0.0) || !self.nugget.is_finite() {
            return Err(Error::invalid(
                "nugget",
                self.nugget,
                "must be non-negative and finite",
            ));
        }
        if !self.sill.is_finite() {
            return Err(Error::invalid("sill", self.sill, "must be finite"));
        }
        if !(self.sill >= self.nugget) {
            return Err(Error::invalid(
                "sill",
                self.sill,
                "must not be smaller than the nugget",
            ));
        }
        Ok(())
    }

    /// Sill minus nugget.
    pub fn partial_sill(&self) -> f64 {
        self.sill - self.nugget
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let params = VariogramParameters::new(15.0, 160.0, 30.0).unwrap();
        assert_eq!(params.partial_sill(), 145.0);

        // pure nugget and zero-variance sets are still valid
        assert!(VariogramParameters::new(5.0, 5.0, 1.0).is_ok());
        assert!(VariogramParameters::new(0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_range() {
        for range in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = VariogramParameters::new(15.0, 160.0, range).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidParameter { name: "range", .. }
            ));
        }
    }

    #[test]
    fn rejects_inverted_model() {
        let err = VariogramParameters::new(20.0, 10.0, 30.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "sill", .. }));
    }

    #[test]
    fn rejects_non_finite_nugget_and_sill() {
        let err = VariogramParameters::new(0.0, f64::INFINITY, 30.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "sill", .. }));

        let err = VariogramParameters::new(f64::INFINITY, f64::INFINITY, 30.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "nugget", .. }));

        let err = VariogramParameters::new(0.0, f64::NAN, 30.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "sill", .. }));
    }

    #[test]
    fn rejects_negative_nugget() {
        let err = VariogramParameters::new(-1.0, 10.0, 30.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "nugget", .. }));
    }
}
