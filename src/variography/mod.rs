pub mod curve;
pub mod experimental;
pub mod model_variograms;
pub mod statistics;
