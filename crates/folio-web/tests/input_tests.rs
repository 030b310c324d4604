// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let t = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(t.is_some());
    let t = t.unwrap();
    assert!(t > 0.0);
    assert!((t - 3.0).abs() < 1e-4, "should hit the near surface");
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ndc_mapping_hits_the_corners() {
    // Top-left CSS corner -> (-1, 1); bottom-right -> (1, -1)
    assert_eq!(ndc_from_css(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
    assert_eq!(ndc_from_css(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
    assert_eq!(ndc_from_css(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
}

#[test]
fn ndc_mapping_survives_degenerate_boxes() {
    assert_eq!(ndc_from_css(10.0, 10.0, 0.0, 600.0), [0.0, 0.0]);
    assert_eq!(ndc_from_css(10.0, 10.0, 800.0, 0.0), [0.0, 0.0]);
}

#[test]
fn pointer_world_scales_to_the_viewport() {
    let p = pointer_world([1.0, -1.0], 4.0, 3.0);
    assert_eq!(p, Vec3::new(4.0, -3.0, 0.0));
    let center = pointer_world([0.0, 0.0], 4.0, 3.0);
    assert_eq!(center, Vec3::ZERO);
}

#[test]
fn pick_nearest_prefers_the_closest_hit() {
    let targets = [
        (Vec3::new(0.0, 0.0, 8.0), 1.0),
        (Vec3::new(0.0, 0.0, 5.0), 1.0),
        (Vec3::new(10.0, 0.0, 5.0), 1.0),
    ];
    let hit = pick_nearest(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &targets);
    assert_eq!(hit, Some(1));
}

#[test]
fn pick_nearest_returns_none_on_miss() {
    let targets = [(Vec3::new(10.0, 0.0, 5.0), 1.0)];
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &targets), None);
}
