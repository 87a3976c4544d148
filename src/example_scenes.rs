use crate::*;
use crate::camera::Camera;
use crate::material::Material;
use crate::object::SimpleObject;
use crate::scene::Scene;
use crate::shape::shapes::Sphere;

/// Diffuse box built from huge spheres, lit by a spherical ceiling lamp,
/// with two white balls on the floor.
pub fn make_box(aspect: f64) -> (Camera, Scene) {
    const R: f64 = 1e5;
    let wall = Material::new_diffuse(RGB::all(0.75));
    let ball = Material::new_diffuse(RGB::all(0.999));
    let objects = vec![
        //left
        SimpleObject::new(Sphere::new(P3::new(R + 1.0, 40.8, 81.6), R), wall.clone()),
        //right
        SimpleObject::new(Sphere::new(P3::new(-R + 99.0, 40.8, 81.6), R), wall.clone()),
        //back
        SimpleObject::new(Sphere::new(P3::new(50.0, 40.8, R), R), wall.clone()),
        //bottom
        SimpleObject::new(Sphere::new(P3::new(50.0, R, 81.6), R), wall.clone()),
        //top
        SimpleObject::new(Sphere::new(P3::new(50.0, -R + 81.6, 81.6), R), wall),
        //light
        SimpleObject::new(
            Sphere::new(P3::new(50.0, 681.6 - 0.27, 81.6), 600.0),
            Material::new_emissive(RGB::all(12.0)),
        ),
        SimpleObject::new(Sphere::new(P3::new(27.0, 16.5, 47.0), 16.5), ball.clone()),
        SimpleObject::new(Sphere::new(P3::new(73.0, 16.5, 78.0), 16.5), ball),
    ];

    // image rows run top to bottom, hence the flipped up vector
    let camera = Camera::new_fov(
        P3::new(50.0, 52.0, 295.6),
        V3::new(0.0, -0.042612, -1.0).normalize(),
        V3::new(0.0, -1.0, 0.0),
        aspect,
        50.0,
        0.0,
    );

    (camera, Scene::new(objects))
}

/// Camera at the centre of a single glowing, non-reflective sphere.
pub fn make_emissive_shell(emission: RGB) -> (Camera, Scene) {
    let objects = vec![SimpleObject::new(
        Sphere::new(P3::origin(), 100.0),
        Material::new_emissive(emission),
    )];
    (centre_camera(), Scene::new(objects))
}

/// Camera inside a closed sphere with a ball in it, no light anywhere.
pub fn make_closed_box(albedo: RGB) -> (Camera, Scene) {
    let material = Material::new_diffuse(albedo);
    let objects = vec![
        SimpleObject::new(Sphere::new(P3::origin(), 100.0), material.clone()),
        SimpleObject::new(Sphere::new(P3::new(0.0, 0.0, -50.0), 20.0), material),
    ];
    (centre_camera(), Scene::new(objects))
}

fn centre_camera() -> Camera {
    Camera::new_fov(
        P3::origin(),
        V3::new(0.0, 0.0, -1.0),
        V3::new(0.0, -1.0, 0.0),
        1.0,
        60.0,
        0.0,
    )
}
