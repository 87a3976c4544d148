use crate::*;

#[derive(Clone, Debug)]
pub struct Hit {
    pub dist: f64,
    pub pos: P3,
    //always faces against the incoming ray
    pub normal: V3,
}

impl Hit {
    pub fn basis(&self) -> OrthoNormalBasis {
        OrthoNormalBasis::from_z(&self.normal)
    }
}

/// Self-intersection guard for rays leaving a surface.
pub const EPSILON: f64 = 1e-4;

trait ShapeImpl {
    fn test_hit(&self, ray: &Ray) -> Option<Hit>;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f64,
    }

    impl Sphere {
        pub fn new(center: P3, radius: f64) -> Self {
            Sphere { center, radius }
        }

        fn make_hit(&self, ray: &Ray, dist: f64) -> Hit {
            let pos = ray.at(dist);
            let mut normal = (pos - self.center).normalize();
            if normal.dot(&ray.dir) > 0.0 {
                normal = -normal;
            }
            Hit { dist, pos, normal }
        }
    }

    impl ShapeImpl for Sphere {
        // t^2 d.d + 2t (o-c).d + (o-c).(o-c) - r^2 = 0, with |d| = 1
        fn test_hit(&self, ray: &Ray) -> Option<Hit> {
            let rel_c = self.center - ray.origin;
            let b = rel_c.dot(&ray.dir);
            let det = b * b - rel_c.norm_squared() + self.radius * self.radius;
            if det < 0.0 {
                return None;
            }
            let det = det.sqrt();
            let tmin = b - det;
            let tmax = b + det;
            if tmin < EPSILON && tmax < EPSILON {
                None
            } else if tmin > EPSILON {
                Some(self.make_hit(ray, tmin))
            } else {
                Some(self.make_hit(ray, tmax))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
}

impl_wrap_from_many! {Shape, shapes, [Sphere]}

use Shape::*;
impl Shape {
    pub fn test_hit(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Sphere(s) => s.test_hit(ray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::Sphere;
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_sphere() -> Shape {
        Sphere::new(P3::new(0.0, 0.0, 5.0), 1.0).into()
    }

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, 1.0));
        let hit = unit_sphere().test_hit(&ray).expect("should hit");
        assert_abs_diff_eq!(hit.dist, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.pos.z, 4.0, epsilon = 1e-12);
        assert_eq!(hit.normal, V3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn miss_when_offset_beyond_radius() {
        let ray = Ray::new(P3::new(1.5, 0.0, 0.0), V3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere().test_hit(&ray).is_none());
    }

    #[test]
    fn miss_when_behind() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().test_hit(&ray).is_none());
    }

    #[test]
    fn hit_from_inside_faces_ray() {
        let dirs = [
            V3::new(0.0, 0.0, 1.0),
            V3::new(0.0, 1.0, 0.0),
            V3::new(1.0, 1.0, -1.0).normalize(),
        ];
        for dir in dirs.iter() {
            let ray = Ray::new(P3::new(0.0, 0.0, 5.0), *dir);
            let hit = unit_sphere().test_hit(&ray).expect("should hit");
            assert_abs_diff_eq!(hit.dist, 1.0, epsilon = 1e-12);
            assert!(hit.normal.dot(&ray.dir) < 0.0);
        }
    }

    #[test]
    fn surface_origin_skips_self_hit() {
        // leaving the near surface towards the inside hits the far side
        let ray = Ray::new(P3::new(0.0, 0.0, 4.0), V3::new(0.0, 0.0, 1.0));
        let hit = unit_sphere().test_hit(&ray).expect("should hit");
        assert_abs_diff_eq!(hit.dist, 2.0, epsilon = 1e-9);
        assert_eq!(hit.normal, V3::new(0.0, 0.0, -1.0));

        // leaving it outwards misses entirely
        let ray = Ray::new(P3::new(0.0, 0.0, 4.0), V3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().test_hit(&ray).is_none());
    }
}
