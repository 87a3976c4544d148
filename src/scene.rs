use crate::*;

/// Owns every object it renders; closest-hit queries scan them linearly.
pub struct Scene {
    objects: object::ObjectList,
}

impl Scene {
    pub fn new(objects: Vec<object::SimpleObject>) -> Self {
        Scene {
            objects: object::ObjectList::new(objects),
        }
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<object::ObjectHit> {
        self.objects.test_hit(ray)
    }

    pub fn objects(&self) -> &[object::SimpleObject] {
        &self.objects.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::material::Material;
    use crate::object::SimpleObject;
    use crate::shape::shapes::Sphere;

    fn make_row() -> Scene {
        // three spheres on the z axis, inserted out of depth order
        Scene::new(vec![
            SimpleObject::new(
                Sphere::new(P3::new(0.0, 0.0, 20.0), 1.0),
                Material::new_diffuse(RGB::all(0.2)),
            ),
            SimpleObject::new(
                Sphere::new(P3::new(0.0, 0.0, 10.0), 1.0),
                Material::new_diffuse(RGB::all(0.5)),
            ),
            SimpleObject::new(
                Sphere::new(P3::new(0.0, 0.0, 30.0), 1.0),
                Material::new_emissive(RGB::all(1.0)),
            ),
        ])
    }

    #[test]
    fn nearest_hit_wins() {
        let scene = make_row();
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, 1.0));
        let hit = scene.test_hit(&ray).expect("should hit");
        assert_abs_diff_eq!(hit.hit.dist, 9.0, epsilon = 1e-12);
        assert_eq!(hit.material.diffuse, RGB::all(0.5));

        let ray = Ray::new(P3::new(0.0, 0.0, 25.0), V3::new(0.0, 0.0, 1.0));
        let hit = scene.test_hit(&ray).expect("should hit");
        assert_abs_diff_eq!(hit.hit.dist, 4.0, epsilon = 1e-12);
        assert_eq!(hit.material.emission, RGB::all(1.0));
    }

    #[test]
    fn miss_everything() {
        let scene = make_row();
        let ray = Ray::new(P3::origin(), V3::new(0.0, 1.0, 0.0));
        assert!(scene.test_hit(&ray).is_none());
        assert!(Scene::new(vec![]).test_hit(&ray).is_none());
        assert_eq!(scene.objects().len(), 3);
    }
}
