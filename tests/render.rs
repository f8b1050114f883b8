use spheretrace::camera::Camera;
use spheretrace::light::Light;
use spheretrace::output::{save_image, to_rgb8};
use spheretrace::sphere::Sphere;
use spheretrace::tracer::SKY_COLOR;
use spheretrace::vector::{Color, Point3};
use spheretrace::{render, render_with, RenderSettings, Scene};

fn single_sphere_lit_from_camera() -> Scene {
    Scene::new(
        vec![Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, Color::new(0.8, 0.3, 0.3))],
        vec![Light::new(Point3::ZERO, Color::ONE)],
    )
}

#[test]
fn two_by_two_frame_of_single_sphere() {
    let scene = single_sphere_lit_from_camera();
    let frame = render(2, 2, &scene, 1);
    assert_eq!(frame.len(), 4);

    let camera = Camera::new(2, 2);
    for (index, color) in frame.iter().enumerate() {
        let (i, j) = ((index % 2) as u32, (index / 2) as u32);
        let hits = scene.spheres[0].intersect(&camera.get_ray(i, j)).is_some();
        if hits {
            assert!(color.is_finite());
            assert!(color.min_element() >= 0.0);
            assert!(color.max_element() < 10.0);
        } else {
            assert_eq!(*color, SKY_COLOR);
        }
    }
}

#[test]
fn center_pixel_of_odd_frame_hits_sphere() {
    let scene = single_sphere_lit_from_camera();
    let frame = render_with(&scene, &RenderSettings::new(3, 3, 1).with_seed(17));
    let center = frame[4];
    assert_ne!(center, SKY_COLOR);
    assert!(center.is_finite() && center.min_element() >= 0.0 && center.max_element() < 10.0);
    // Corners look past the sphere.
    for corner in [0, 2, 6, 8] {
        assert_eq!(frame[corner], SKY_COLOR);
    }
}

#[test]
fn seeded_demo_render_is_byte_identical() {
    let settings = RenderSettings::new(40, 30, 4).with_seed(2024);
    let a = to_rgb8(&render_with(&Scene::demo(), &settings), 40, 30).unwrap();
    let b = to_rgb8(&render_with(&Scene::demo(), &settings), 40, 30).unwrap();
    assert_eq!(a.into_raw(), b.into_raw());
}

#[test]
fn demo_frame_is_well_defined() {
    let frame = render_with(&Scene::demo(), &RenderSettings::new(32, 24, 10).with_seed(1));
    assert!(frame.iter().all(|c| c.is_finite() && c.min_element() >= 0.0));
}

#[test]
fn render_and_save_bmp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.bmp");
    let frame = render_with(&Scene::demo(), &RenderSettings::new(16, 12, 2).with_seed(3));
    save_image(&frame, &path, 16, 12).unwrap();

    let loaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (16, 12));
    assert_eq!(loaded, to_rgb8(&frame, 16, 12).unwrap());
}
