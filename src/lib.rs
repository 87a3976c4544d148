use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

#[macro_use]
pub mod util;

pub mod camera;
pub mod cli;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod manager;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod tile;

pub use error::{Error, Result};
pub use math::OrthoNormalBasis;
pub use ray::Ray;
pub use rgb::RGB;
