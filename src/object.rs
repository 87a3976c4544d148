use crate::*;

pub struct ObjectHit<'a> {
    pub hit: shape::Hit,
    pub material: &'a material::Material,
}

impl<'a> ObjectHit<'a> {
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(if y.hit.dist < x.hit.dist { y } else { x }),
            (x, None) => x,
            (None, y) => y,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimpleObject {
    pub shape: shape::Shape,
    pub material: material::Material,
}

impl SimpleObject {
    pub fn new<S: Into<shape::Shape>>(shape: S, material: material::Material) -> Self {
        SimpleObject {
            shape: shape.into(),
            material,
        }
    }

    pub fn test_hit(&self, ray: &ray::Ray) -> Option<ObjectHit> {
        self.shape.test_hit(ray).map(|hit| ObjectHit {
            hit,
            material: &self.material,
        })
    }
}

pub struct ObjectList {
    pub objects: Vec<SimpleObject>,
}

impl ObjectList {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        ObjectList { objects }
    }

    pub fn test_hit(&self, ray: &ray::Ray) -> Option<ObjectHit> {
        self.objects
            .iter()
            .fold(None, |nearest, o| ObjectHit::nearer_option(nearest, o.test_hit(ray)))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
