pub mod family;
pub mod iso_exponential;
pub mod iso_fitter;
pub mod iso_gaussian;
pub mod iso_spherical;
pub mod parameters;

pub trait IsoVariogramModel {
    /// Covariance at zero separation, i.e. the sill.
    fn c_0(&self) -> f64;
    fn variogram(&self, h: f64) -> f64;

    fn covariogram(&self, h: f64) -> f64 {
        self.c_0() - self.variogram(h)
    }
}
