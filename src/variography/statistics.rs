//! Descriptive statistics derived from variogram parameters

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::model_variograms::parameters::VariogramParameters;

/// Summary of how much of the total variance is spatially structured.
///
/// `structured_variance` and `partial_sill` are the same quantity; both are
/// reported because they are read as separate concepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStatistics {
    /// sill - nugget
    pub structured_variance: f64,
    /// nugget / sill
    pub relative_nugget_effect: f64,
    /// range / max study-area distance
    pub range_to_distance_ratio: f64,
    /// sill - nugget
    pub partial_sill: f64,
    /// partial sill / sill
    pub proportion_structured: f64,
}

/// Derive [`DerivedStatistics`] from a parameter set and the largest
/// separation in the study area.
///
/// Fails with [`Error::InvalidParameter`] when `max_distance <= 0` and with
/// [`Error::DivisionUndefined`] when the sill is zero.
pub fn derived_statistics(
    params: &VariogramParameters,
    max_distance: f64,
) -> Result<DerivedStatistics> {
    if !(max_distance > 0.0) || !max_distance.is_finite() {
        return Err(Error::invalid(
            "max_distance",
            max_distance,
            "must be positive and finite",
        ));
    }
    if params.sill == 0.0 {
        return Err(Error::DivisionUndefined {
            quantity: "relative nugget effect",
        });
    }
    params.validate()?;

    let partial_sill = params.sill - params.nugget;

    Ok(DerivedStatistics {
        structured_variance: params.sill - params.nugget,
        relative_nugget_effect: params.nugget / params.sill,
        range_to_distance_ratio: params.range / max_distance,
        partial_sill,
        proportion_structured: partial_sill / params.sill,
    })
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn tutorial_statistics() {
        let params = VariogramParameters::new(15.0, 160.0, 30.0).unwrap();
        let stats = derived_statistics(&params, 100.0).unwrap();

        assert_eq!(stats.structured_variance, 145.0);
        assert_eq!(stats.relative_nugget_effect, 0.09375);
        assert_relative_eq!(stats.range_to_distance_ratio, 0.3);
        assert_eq!(stats.partial_sill, 145.0);
        assert_eq!(stats.proportion_structured, 0.90625);
    }

    #[test]
    fn partial_sill_equals_structured_variance() {
        for (nugget, sill, range) in [(0.0, 1.0, 5.0), (0.3, 0.7, 12.0), (4.0, 4.0, 1.0)] {
            let params = VariogramParameters::new(nugget, sill, range).unwrap();
            let stats = derived_statistics(&params, 50.0).unwrap();
            assert_eq!(stats.partial_sill, stats.structured_variance);
            assert!((0.0..=1.0).contains(&stats.proportion_structured));
            assert_relative_eq!(
                stats.proportion_structured + stats.relative_nugget_effect,
                1.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn zero_sill_is_undefined() {
        let params = VariogramParameters {
            nugget: 0.0,
            sill: 0.0,
            range: 30.0,
        };
        assert!(matches!(
            derived_statistics(&params, 100.0),
            Err(Error::DivisionUndefined { .. })
        ));
    }

    #[test]
    fn infinite_sill_is_invalid() {
        let params = VariogramParameters {
            nugget: f64::INFINITY,
            sill: f64::INFINITY,
            range: 30.0,
        };
        assert!(matches!(
            derived_statistics(&params, 100.0),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn non_positive_max_distance_is_invalid() {
        let params = VariogramParameters::new(15.0, 160.0, 30.0).unwrap();
        for max_distance in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                derived_statistics(&params, max_distance),
                Err(Error::InvalidParameter {
                    name: "max_distance",
                    ..
                })
            ));
        }
    }
}
