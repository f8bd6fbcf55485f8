use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::error::{Error, Result};
use crate::spatial_database::rtree_point_set::point_set::PointSet;

use super::{ExperimentalVariogram, LagBounds, LagParameters};

/// Omnidirectional experimental variogram over a point set.
#[derive(Clone)]
pub struct CPUCalculator<'a> {
    //data tree
    data: &'a PointSet,

    //lag classes
    lags: Vec<LagBounds>,
}

impl<'a> CPUCalculator<'a> {
    pub fn new(data: &'a PointSet, params: &LagParameters) -> Result<Self> {
        if data.len() < 2 {
            return Err(Error::InsufficientData {
                what: "experimental variogram",
                needed: 2,
                found: data.len(),
            });
        }

        let max_distance = if params.lag_width.is_none() && params.max_lag.is_none() {
            data.max_distance()
        } else {
            0.0
        };
        let lags = params.lag_bounds(max_distance)?;

        Ok(Self { data, lags })
    }

    pub fn lags(&self) -> &[LagBounds] {
        &self.lags
    }

    pub fn calculate(&self) -> ExperimentalVariogram {
        let n_lags = self.lags.len();
        let width = self.lags[0].ub - self.lags[0].lb;
        let max_lag = self.lags[n_lags - 1].ub;

        let points = &self.data.points;
        let values = &self.data.data;
        let tree = &self.data.tree;

        let (semivar, counts) = (0..points.len())
            .into_par_iter()
            .fold(
                || (vec![0f64; n_lags], vec![0u32; n_lags]),
                |(mut semivar, mut counts), i| {
                    let p = points[i];
                    let value = values[i];

                    for pair in tree.locate_within_distance([p.x, p.y, p.z], max_lag * max_lag) {
                        // each unordered pair once
                        let j = pair.data as usize;
                        if j <= i {
                            continue;
                        }

                        let d = nalgebra::distance(&p, &points[j]);
                        let lag = (d / width) as usize;
                        if lag >= n_lags {
                            continue;
                        }

                        let diff = value - values[j];
                        semivar[lag] += diff * diff;
                        counts[lag] += 1;
                    }

                    (semivar, counts)
                },
            )
            .reduce(
                || (vec![0f64; n_lags], vec![0u32; n_lags]),
                |(mut semivar, mut counts), (other_semivar, other_counts)| {
                    semivar
                        .iter_mut()
                        .zip(other_semivar)
                        .for_each(|(s, o)| *s += o);
                    counts
                        .iter_mut()
                        .zip(other_counts)
                        .for_each(|(c, o)| *c += o);
                    (semivar, counts)
                },
            );

        let semivariance = semivar
            .iter()
            .zip(counts.iter())
            .map(|(&v, &c)| {
                if c == 0 {
                    f64::NAN
                } else {
                    v / (2f64 * c as f64)
                }
            })
            .collect();

        debug!(
            n_points = points.len(),
            n_lags,
            pairs = counts.iter().map(|&c| c as u64).sum::<u64>(),
            "computed experimental variogram"
        );

        ExperimentalVariogram {
            lags: self.lags.clone(),
            semivariance,
            counts,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;

    fn line(values: &[f64]) -> PointSet {
        let points = (0..values.len())
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect();
        PointSet::new(points, values.to_vec()).unwrap()
    }

    #[test]
    fn collinear_points() {
        let data = line(&[0.0, 1.0, 2.0, 3.0]);
        let params = LagParameters {
            n_lags: 3,
            lag_width: None,
            max_lag: Some(3.0),
        };
        let vgram = CPUCalculator::new(&data, &params).unwrap().calculate();

        // lag [0, 1) has no pairs
        assert_eq!(vgram.counts, vec![0, 3, 2]);
        assert!(vgram.semivariance[0].is_nan());
        assert_relative_eq!(vgram.semivariance[1], 0.5);
        assert_relative_eq!(vgram.semivariance[2], 2.0);

        let valid: Vec<_> = vgram.valid_lags().collect();
        assert_eq!(valid.len(), 2);
        assert_relative_eq!(valid[0].0, 1.5);
    }

    #[test]
    fn constant_field_has_zero_semivariance() {
        let data = line(&[4.0; 10]);
        let vgram = CPUCalculator::new(&data, &LagParameters::default())
            .unwrap()
            .calculate();

        assert_eq!(vgram.lags.len(), 15);
        for (_, sv, _) in vgram.valid_lags() {
            assert_eq!(sv, 0.0);
        }
        // default max lag is half the extent of the line
        assert_relative_eq!(vgram.lags.last().unwrap().ub, 4.5);
    }

    #[test]
    fn needs_two_points() {
        let data = line(&[1.0]);
        assert!(matches!(
            CPUCalculator::new(&data, &LagParameters::default()),
            Err(Error::InsufficientData { found: 1, .. })
        ));
    }
}
