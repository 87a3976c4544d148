use crate::*;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    /// `dir` is expected to be unit length; this is not checked.
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    /// Ray starting at `from` and heading towards `to`.
    /// Coincident points give a NaN direction.
    pub fn from_to(from: &P3, to: &P3) -> Self {
        Ray::new(*from, (to - from).normalize())
    }

    pub fn at(&self, dist: f64) -> P3 {
        self.origin + self.dir * dist
    }
}
