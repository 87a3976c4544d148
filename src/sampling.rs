use crate::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Cosine-weighted direction in one cell of an `n x n` stratification of
/// the unit disk (Malley's method), lifted onto the hemisphere around
/// `basis.z()`.
///
/// The azimuth is split into `n` wedges by `cell_u` and the squared radius
/// into `n` rings by `cell_v`; the sample is jittered uniformly inside its
/// cell. The returned direction is in world space and normalized.
pub struct StratifiedCosHemisphere<'a> {
    pub basis: &'a OrthoNormalBasis,
    pub cell_u: usize,
    pub cell_v: usize,
    pub sqrt_samples: usize,
}

impl<'a> StratifiedCosHemisphere<'a> {
    pub fn local_dir(&self, xi1: f64, xi2: f64) -> V3 {
        let n = self.sqrt_samples as f64;
        let theta = 2.0 * std::f64::consts::PI * (self.cell_u as f64 + xi1) / n;
        let radius_sq = (self.cell_v as f64 + xi2) / n;
        let radius = radius_sq.sqrt();
        V3::new(
            theta.cos() * radius,
            theta.sin() * radius,
            (1.0 - radius_sq).sqrt(),
        )
    }
}

impl<'a> Distribution<V3> for StratifiedCosHemisphere<'a> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> V3 {
        let unit = Uniform::new(0.0, 1.0);
        let xi1 = unit.sample(rng);
        let xi2 = unit.sample(rng);
        self.basis.transform(&self.local_dir(xi1, xi2)).normalize()
    }
}
