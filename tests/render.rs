use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raycast::{
    ray_for_pixel, render, save_ppm, Camera, Color, OutputError, Scene, Sphere, Vec3, Viewport,
};
use std::fs;

const BACKGROUND: Color = Color::new(0, 0, 128);
const RED: Color = Color::new(200, 0, 0);

fn random_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.0, 1.0),
        rng.gen_range(-1.0, 1.0),
        rng.gen_range(-1.0, 1.0),
    )
}

fn random_camera(rng: &mut StdRng) -> Camera {
    loop {
        let position = random_vec3(rng) * 100.0;
        let forward = random_vec3(rng);
        let up = random_vec3(rng);
        let fov = rng.gen_range(1.0, 89.0);
        if let Ok(camera) = Camera::new(position, forward, up, fov) {
            return camera;
        }
    }
}

fn single_sphere_scene() -> Scene {
    vec![Sphere::new(Vec3::new(0.0, 10.0, 0.0), 2.0, RED).unwrap()].into()
}

#[test]
fn camera_rays_are_unit_length() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let camera = random_camera(&mut rng);
        let viewport = Viewport::new(rng.gen_range(1, 2000), rng.gen_range(1, 2000)).unwrap();

        for _ in 0..50 {
            let x = rng.gen_range(0, viewport.width());
            let y = rng.gen_range(0, viewport.height());
            let ray = ray_for_pixel(x, y, &camera, viewport);

            assert_eq!(ray.origin, camera.position());
            assert!(
                (ray.direction.length() - 1.0).abs() < 1e-9,
                "pixel ({}, {}) gave {}",
                x,
                y,
                ray.direction
            );
        }
    }
}

#[test]
fn center_pixel_follows_forward_for_any_camera() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let camera = random_camera(&mut rng);
        let viewport =
            Viewport::new(2 * rng.gen_range(1, 1000), 2 * rng.gen_range(1, 1000)).unwrap();
        let (x, y) = viewport.center_pixel();

        let ray = ray_for_pixel(x, y, &camera, viewport);
        assert!((ray.direction - camera.forward().normalized()).length() < 1e-9);
    }
}

#[test]
fn reference_scene_center_and_corner() {
    let viewport = Viewport::new(800, 600).unwrap();
    let camera = Camera::new(Vec3::zero(), Vec3::unit_y(), Vec3::unit_z(), 35.0).unwrap();
    let frame = render(&camera, viewport, &single_sphere_scene(), BACKGROUND);

    let (x, y) = viewport.center_pixel();
    assert_eq!(frame.pixel(x, y), RED);
    assert_eq!(frame.pixel(0, 0), BACKGROUND);
}

#[test]
fn saved_image_decodes_to_rendered_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.ppm");

    let viewport = Viewport::new(64, 48).unwrap();
    let frame = render(&Camera::default(), viewport, &single_sphere_scene(), BACKGROUND);
    save_ppm(&frame, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some(format!("# {}", path.display()).as_str()));
    assert_eq!(lines.next(), Some("64 48"));
    assert_eq!(lines.next(), Some("255"));
    assert_eq!(lines.count(), 48);

    let decoded = image::open(&path).unwrap().to_rgb();
    assert_eq!(decoded.dimensions(), (64, 48));
    for y in 0..48 {
        for x in 0..64 {
            assert_eq!(Color::from(decoded.get_pixel(x, y).0), frame.pixel(x, y));
        }
    }
}

#[test]
fn rendering_twice_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.ppm");
    let second = dir.path().join("second.ppm");

    let scene = raycast::demo::create_scene().unwrap();
    let viewport = Viewport::new(120, 90).unwrap();
    for path in &[&first, &second] {
        let frame = render(&Camera::default(), viewport, &scene, BACKGROUND);
        save_ppm(&frame, path).unwrap();
    }

    // The comment line names the file, so compare everything after it.
    let first = fs::read_to_string(&first).unwrap();
    let second = fs::read_to_string(&second).unwrap();
    let body = |text: &str| text.lines().skip(2).map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(body(&first), body(&second));
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.ppm");
    fs::write(&path, "stale").unwrap();

    let frame = render(
        &Camera::default(),
        Viewport::new(4, 3).unwrap(),
        &Scene::new(),
        BACKGROUND,
    );
    save_ppm(&frame, &path).unwrap();

    assert!(fs::read_to_string(&path).unwrap().starts_with("P3\n"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn failed_save_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let frame = render(
        &Camera::default(),
        Viewport::new(4, 3).unwrap(),
        &Scene::new(),
        BACKGROUND,
    );

    let missing_parent = dir.path().join("missing").join("image.ppm");
    assert!(matches!(
        save_ppm(&frame, &missing_parent),
        Err(OutputError::Io { .. })
    ));
    assert!(!missing_parent.exists());

    // Renaming a file over a directory fails after the temporary was written.
    let occupied = dir.path().join("occupied.ppm");
    fs::create_dir(&occupied).unwrap();
    assert!(matches!(save_ppm(&frame, &occupied), Err(OutputError::Io { .. })));
    assert!(occupied.is_dir());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
