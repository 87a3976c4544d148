use super::*;
use crate::sampling::StratifiedCosHemisphere;
use rand::distributions::Distribution;

/// Paths are cut after this many bounces. Whatever the cut path would have
/// gathered beyond the last emission is lost, so the estimate is biased low.
pub const DEPTH_MAX: usize = 5;

/// Recursive estimate of the radiance arriving along `ray`.
///
/// The first call splits the hemisphere above the hit into
/// `sqrt_samples x sqrt_samples` strata with one cosine-weighted sample in
/// each; deeper bounces take a single sample. Cosine-weighted sampling of a
/// diffuse surface cancels the cosine and pdf terms, so the strata are
/// simply averaged.
pub fn radiance<R: ?Sized>(
    mode: RenderMode,
    scene: &Scene,
    ray: &Ray,
    depth: usize,
    sqrt_samples: usize,
    rng: &mut R,
) -> RGB
where
    R: Rng,
{
    let hit = match scene.test_hit(ray) {
        Some(hit) => hit,
        None => return RGB::black(),
    };
    let material = hit.material;
    if mode == RenderMode::Preview {
        return material.diffuse;
    }

    let depth = depth + 1;
    if depth > DEPTH_MAX {
        return material.emission;
    }

    let basis = hit.hit.basis();
    let mut result = RGB::black();
    for cell_u in 0..sqrt_samples {
        for cell_v in 0..sqrt_samples {
            let dir = StratifiedCosHemisphere {
                basis: &basis,
                cell_u,
                cell_v,
                sqrt_samples,
            }
            .sample(rng);
            let next = Ray::new(hit.hit.pos, dir);
            result += material.emission
                + material.diffuse * radiance(mode, scene, &next, depth, 1, rng);
        }
    }

    if sqrt_samples == 1 {
        result
    } else {
        result * (1.0 / (sqrt_samples * sqrt_samples) as f64)
    }
}
