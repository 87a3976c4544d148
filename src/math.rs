use crate::*;

/// Right-handed orthonormal frame. `transform` maps local coordinates into
/// world space.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoNormalBasis {
    x: V3,
    y: V3,
    z: V3,
}

const COINCIDENT: f64 = 0.9999;

impl OrthoNormalBasis {
    pub fn new(x: V3, y: V3, z: V3) -> Self {
        OrthoNormalBasis { x, y, z }
    }

    pub fn from_z(z: &V3) -> Self {
        let zz = z.normalize();
        let helper = if zz.dot(&V3::x()).abs() > COINCIDENT {
            V3::y()
        } else {
            V3::x()
        };
        let xx = helper.cross(&zz).normalize();
        let yy = zz.cross(&xx).normalize();
        Self::new(xx, yy, zz)
    }

    pub fn from_xy(x: &V3, y: &V3) -> Self {
        let xx = x.normalize();
        let zz = x.cross(y).normalize();
        let yy = zz.cross(&xx);
        Self::new(xx, yy, zz)
    }

    pub fn from_yx(y: &V3, x: &V3) -> Self {
        let yy = y.normalize();
        let zz = x.cross(y).normalize();
        let xx = yy.cross(&zz);
        Self::new(xx, yy, zz)
    }

    pub fn from_xz(x: &V3, z: &V3) -> Self {
        let xx = x.normalize();
        let yy = z.cross(x).normalize();
        let zz = xx.cross(&yy);
        Self::new(xx, yy, zz)
    }

    pub fn from_zx(z: &V3, x: &V3) -> Self {
        let zz = z.normalize();
        let yy = z.cross(x).normalize();
        let xx = yy.cross(&zz);
        Self::new(xx, yy, zz)
    }

    pub fn from_yz(y: &V3, z: &V3) -> Self {
        let yy = y.normalize();
        let xx = y.cross(z).normalize();
        let zz = xx.cross(&yy);
        Self::new(xx, yy, zz)
    }

    pub fn from_zy(z: &V3, y: &V3) -> Self {
        let zz = z.normalize();
        let xx = y.cross(z).normalize();
        let yy = zz.cross(&xx);
        Self::new(xx, yy, zz)
    }

    pub fn x(&self) -> &V3 {
        &self.x
    }

    pub fn y(&self) -> &V3 {
        &self.y
    }

    pub fn z(&self) -> &V3 {
        &self.z
    }

    //local to world
    pub fn transform(&self, v: &V3) -> V3 {
        self.x * v[0] + self.y * v[1] + self.z * v[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn check_orthonormal(basis: &OrthoNormalBasis) {
        assert_abs_diff_eq!(basis.x().norm(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(basis.y().norm(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(basis.z().norm(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(basis.x().dot(basis.y()), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(basis.y().dot(basis.z()), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(basis.z().dot(basis.x()), 0.0, epsilon = EPS);
        let cross = basis.x().cross(basis.y());
        for i in 0..3 {
            assert_abs_diff_eq!(cross[i], basis.z()[i], epsilon = EPS);
        }
    }

    fn directions() -> Vec<V3> {
        vec![
            V3::new(1.0, 0.0, 0.0),
            V3::new(-1.0, 0.0, 0.0),
            V3::new(0.0, 1.0, 0.0),
            V3::new(0.0, 0.0, -1.0),
            V3::new(1.0, 1e-6, 0.0),
            V3::new(0.3, -2.0, 5.0),
            V3::new(-7.0, 0.1, 0.2),
            V3::new(1e-3, 1e-3, 1e-3),
        ]
    }

    #[test]
    fn from_z_is_orthonormal() {
        for z in directions() {
            let basis = OrthoNormalBasis::from_z(&z);
            check_orthonormal(&basis);
            let zn = z.normalize();
            for i in 0..3 {
                assert_abs_diff_eq!(basis.z()[i], zn[i], epsilon = EPS);
            }
        }
    }

    #[test]
    fn from_z_random_directions() {
        use rand::distributions::Uniform;
        use rand::prelude::*;
        let mut rng = SmallRng::seed_from_u64(7);
        let distribution = Uniform::new(-10.0, 10.0);
        for _ in 0..1000 {
            let z = V3::new(
                distribution.sample(&mut rng),
                distribution.sample(&mut rng),
                distribution.sample(&mut rng),
            );
            check_orthonormal(&OrthoNormalBasis::from_z(&z));
        }
    }

    #[test]
    fn two_axis_variants() {
        let a = V3::new(0.3, -2.0, 5.0);
        let b = V3::new(1.0, 1.0, 0.5);

        let basis = OrthoNormalBasis::from_xy(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.x().dot(&a.normalize()), 1.0, epsilon = EPS);

        let basis = OrthoNormalBasis::from_yx(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.y().dot(&a.normalize()), 1.0, epsilon = EPS);

        let basis = OrthoNormalBasis::from_xz(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.x().dot(&a.normalize()), 1.0, epsilon = EPS);

        let basis = OrthoNormalBasis::from_zx(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.z().dot(&a.normalize()), 1.0, epsilon = EPS);

        let basis = OrthoNormalBasis::from_yz(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.y().dot(&a.normalize()), 1.0, epsilon = EPS);

        let basis = OrthoNormalBasis::from_zy(&a, &b);
        check_orthonormal(&basis);
        assert_abs_diff_eq!(basis.z().dot(&a.normalize()), 1.0, epsilon = EPS);
    }

    #[test]
    fn transform_maps_axes() {
        let basis = OrthoNormalBasis::from_z(&V3::new(0.0, 0.0, 2.0));
        assert_eq!(basis.transform(&V3::z()), V3::z());
        let v = basis.transform(&V3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPS);
    }
}
