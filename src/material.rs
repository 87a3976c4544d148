use crate::*;

/// Emitting, perfectly diffuse surface response. `diffuse` is the albedo;
/// values above one are not rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub emission: RGB,
    pub diffuse: RGB,
}

impl Material {
    pub fn new(emission: RGB, diffuse: RGB) -> Self {
        Material { emission, diffuse }
    }

    pub fn new_diffuse(color: RGB) -> Self {
        Self::new(RGB::black(), color)
    }

    pub fn new_emissive(emission: RGB) -> Self {
        Self::new(emission, RGB::black())
    }
}
