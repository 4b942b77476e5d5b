use glam::{Vec2, Vec3};
use room_core::ray::{ray_aabb, ray_sphere, ray_triangle, Ray};
use room_core::Camera;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    let result = ray_sphere(ray_origin, ray_dir, center, radius);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 10.0); // Should hit before z=10
}

#[test]
fn ray_sphere_intersection_miss() {
    // Ray goes in +X, sphere is out along +Z
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_intersection_tangent() {
    // Ray grazes the sphere edge
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(2.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_some());
    assert!(result.unwrap() > 0.0);
}

#[test]
fn ray_sphere_behind_origin_misses() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_aabb_entry_distance() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_aabb(&ray, Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(t.is_some());
    assert!((t.unwrap() - 9.0).abs() < 1e-5);
}

#[test]
fn ray_aabb_miss() {
    let ray = Ray::new(Vec3::new(5.0, 5.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_aabb(&ray, Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(t.is_none());
}

#[test]
fn ray_aabb_origin_inside_reports_zero() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let t = ray_aabb(&ray, Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(t, Some(0.0));
}

#[test]
fn ray_aabb_box_behind_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
    let t = ray_aabb(&ray, Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(t.is_none());
}

#[test]
fn ray_triangle_hit_and_miss() {
    let v0 = Vec3::new(-1.0, -1.0, 0.0);
    let v1 = Vec3::new(1.0, -1.0, 0.0);
    let v2 = Vec3::new(0.0, 1.0, 0.0);

    // Through the centroid region
    let ray = Ray::new(Vec3::new(0.0, -0.2, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_triangle(&ray, v0, v1, v2);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-5);

    // Outside the triangle bounds
    let ray = Ray::new(Vec3::new(2.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(ray_triangle(&ray, v0, v1, v2).is_none());

    // Parallel to the triangle plane
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
    assert!(ray_triangle(&ray, v0, v1, v2).is_none());
}

#[test]
fn pointer_ray_through_screen_center_points_at_target() {
    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 100.0,
    };
    let ray = camera.pointer_ray(Vec2::ZERO);
    // Looking straight down -Z from (0, 0, 10)
    assert!(ray.dir.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-4));
    assert!(ray.origin.x.abs() < 1e-4);
    assert!(ray.origin.y.abs() < 1e-4);
    // Origin sits on the near plane, in front of the eye
    assert!(ray.origin.z < 10.0 && ray.origin.z > 9.0);
}

#[test]
fn pointer_ray_right_of_center_tilts_right() {
    let camera = Camera::desk_view(16.0 / 9.0);
    let center = camera.pointer_ray(Vec2::ZERO);
    let right = camera.pointer_ray(Vec2::new(0.5, 0.0));
    assert!(center.dir.abs_diff_eq(center.dir.normalize(), 1e-5));
    // The two rays must diverge
    assert!(center.dir.dot(right.dir) < 0.9999);
}
