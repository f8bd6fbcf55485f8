pub mod error;
pub mod spatial_database;
pub mod variography;

pub use error::{Error, Result};

pub mod prelude {

    pub mod re_exports {
        pub use nalgebra;
        pub use rstar;
    }

    pub use crate::error::{Error, Result};
    pub use crate::spatial_database::rtree_point_set::point_set::{CsvColumns, PointSet};
    pub use crate::variography::{
        curve::{DistanceSample, SemivariogramCurve},
        experimental::{cpu_calculator::CPUCalculator, ExperimentalVariogram, LagParameters},
        model_variograms::{
            family::{IsoVariogramType, ModelFamily},
            iso_fitter::{fit_variogram, FitConfig, FittedVariogram},
            iso_spherical::evaluate_spherical,
            parameters::VariogramParameters,
            IsoVariogramModel,
        },
        statistics::{derived_statistics, DerivedStatistics},
    };
}
