use crate::*;

/// Thin-lens camera looking down `basis.z()`. The sensor rectangle
/// `[left, right] x [bottom, top]` sits at `distance` in front of the lens;
/// with a zero aperture every ray starts at `position`.
#[derive(Clone, Debug)]
pub struct Camera {
    position: P3,
    basis: OrthoNormalBasis,
    aperture: f64,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    distance: f64,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: P3,
        dir: V3,
        up: V3,
        aperture: f64,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        distance: f64,
    ) -> Self {
        Camera {
            position,
            basis: OrthoNormalBasis::from_zy(&dir, &up),
            aperture,
            left,
            right,
            bottom,
            top,
            distance,
        }
    }

    /// Sensor one unit high, `aspect` wide, placed so that it spans
    /// `vfov_degree` vertically.
    pub fn new_fov(
        position: P3,
        dir: V3,
        up: V3,
        aspect: f64,
        vfov_degree: f64,
        aperture: f64,
    ) -> Self {
        let height = 1.0;
        let width = height * aspect;
        let distance = height / (vfov_degree.to_radians() / 2.0).tan();
        Self::new(
            position,
            dir,
            up,
            aperture,
            -width / 2.0,
            width / 2.0,
            -height / 2.0,
            height / 2.0,
            distance,
        )
    }

    pub fn position(&self) -> &P3 {
        &self.position
    }

    /// `x` and `y` are normalized sensor coordinates in `[0, 1]`; `(0, 0)`
    /// maps to the `left`/`bottom` corner. `u` and `v` pick the point on the
    /// lens disk and are unused when the aperture is zero.
    pub fn ray(&self, x: f64, y: f64, u: f64, v: f64) -> Ray {
        let origin = if self.aperture > 0.0 {
            let theta = 2.0 * std::f64::consts::PI * u;
            let r = self.aperture * v.sqrt();
            self.position + self.basis.x() * (r * theta.cos()) + self.basis.y() * (r * theta.sin())
        } else {
            self.position
        };
        let sensor_x = self.left + (self.right - self.left) * x;
        let sensor_y = self.bottom + (self.top - self.bottom) * y;
        let target = self.position
            + self.basis.z() * self.distance
            + self.basis.x() * sensor_x
            + self.basis.y() * sensor_y;
        Ray::from_to(&origin, &target)
    }
}
