use folio_core::{
    ease_alpha, ease_to_rest, step_free, world_viewport, FloatBounds, Kinematics,
    MAX_FLOAT_SPEED,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bounds() -> FloatBounds {
    let (w, h) = world_viewport(16.0 / 9.0);
    FloatBounds::from_viewport(w, h)
}

fn still(position: Vec3, velocity: Vec3) -> Kinematics {
    Kinematics {
        position,
        velocity,
        rotation: Vec3::ZERO,
        angular_velocity: Vec3::ZERO,
    }
}

#[test]
fn boundary_reflection_flips_sign_and_keeps_magnitude() {
    let b = bounds();
    let mut kin = still(Vec3::new(b.half_width + 0.2, 0.0, 0.0), Vec3::new(1.3, 0.0, 0.0));
    step_free(&mut kin, b, None, 1.0 / 60.0);
    assert!(kin.velocity.x < 0.0, "velocity should have flipped");
    assert!((kin.velocity.x.abs() - 1.3).abs() < 1e-6, "magnitude changed");
    assert_eq!(kin.velocity.y, 0.0);
    assert_eq!(kin.velocity.z, 0.0);
}

#[test]
fn z_axis_reflects_against_its_own_slab() {
    let b = bounds();
    let mut kin = still(Vec3::new(0.0, 0.0, b.z_max + 0.1), Vec3::new(0.0, 0.0, 0.5));
    step_free(&mut kin, b, None, 1.0 / 60.0);
    assert!(kin.velocity.z < 0.0);

    let mut kin = still(Vec3::new(0.0, 0.0, b.z_min - 0.1), Vec3::new(0.0, 0.0, -0.5));
    step_free(&mut kin, b, None, 1.0 / 60.0);
    assert!(kin.velocity.z > 0.0);
}

#[test]
fn pointer_repulsion_pushes_away() {
    let b = bounds();
    let mut kin = still(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
    step_free(&mut kin, b, Some(Vec3::ZERO), 1.0 / 60.0);
    assert!(kin.velocity.x > 0.0, "object should accelerate away from pointer");

    // Outside the radius the pointer has no effect
    let mut far = still(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO);
    step_free(&mut far, b, Some(Vec3::ZERO), 1.0 / 60.0);
    assert_eq!(far.velocity, Vec3::ZERO);
}

#[test]
fn speed_is_clamped() {
    let b = bounds();
    let mut kin = still(Vec3::ZERO, Vec3::new(40.0, -25.0, 10.0));
    for _ in 0..10 {
        step_free(&mut kin, b, Some(Vec3::new(0.1, 0.0, 0.0)), 1.0 / 60.0);
        assert!(kin.velocity.length() <= MAX_FLOAT_SPEED + 1e-4);
    }
}

#[test]
fn easing_is_frame_rate_independent() {
    let start = still(Vec3::new(4.0, -2.0, 1.0), Vec3::ZERO);

    let mut at_60hz = start.clone();
    for _ in 0..60 {
        ease_to_rest(&mut at_60hz, 1.0 / 60.0);
    }
    let mut at_10hz = start.clone();
    for _ in 0..10 {
        ease_to_rest(&mut at_10hz, 1.0 / 10.0);
    }
    // Compounded exponential decay over one second is the same either way
    assert!((at_60hz.position - at_10hz.position).length() < 1e-4);
}

#[test]
fn easing_converges_to_rest() {
    let mut kin = Kinematics {
        position: Vec3::new(3.0, 3.0, -2.0),
        velocity: Vec3::ZERO,
        rotation: Vec3::new(1.0, -0.5, 0.2),
        angular_velocity: Vec3::ZERO,
    };
    for _ in 0..180 {
        ease_to_rest(&mut kin, 1.0 / 60.0);
    }
    assert!(kin.position.length() < 1e-4);
    assert!(kin.rotation.length() < 1e-4);
}

#[test]
fn kinematics_survive_pin_and_release() {
    let b = bounds();
    let mut rng = StdRng::seed_from_u64(7);
    let mut kin = Kinematics::spawn(&mut rng);

    for _ in 0..30 {
        step_free(&mut kin, b, None, 1.0 / 60.0);
    }
    let velocity_before = kin.velocity;
    let spin_before = kin.angular_velocity;

    // Pinned phase: position eases but the drift state is not reset
    for _ in 0..120 {
        ease_to_rest(&mut kin, 1.0 / 60.0);
    }
    assert_eq!(kin.velocity, velocity_before);
    assert_eq!(kin.angular_velocity, spin_before);

    // Released again: motion resumes from the preserved record
    let rest_position = kin.position;
    step_free(&mut kin, b, None, 1.0 / 60.0);
    let expected = rest_position + velocity_before * (1.0 / 60.0);
    assert!((kin.position - expected).length() < 1e-5);
}

#[test]
fn ease_alpha_compounds_exactly() {
    // (1 - alpha(dt))^n == 1 - alpha(n * dt)
    let tau = 0.16;
    let keep_small = 1.0 - ease_alpha(0.25, tau);
    let keep_big = 1.0 - ease_alpha(1.0, tau);
    assert!((keep_small.powi(4) - keep_big).abs() < 1e-6);
}

#[test]
fn world_viewport_tracks_aspect() {
    let (w_wide, h_wide) = world_viewport(16.0 / 9.0);
    let (w_tall, h_tall) = world_viewport(0.6);
    assert!((h_wide - h_tall).abs() < 1e-6, "height is aspect independent");
    assert!(w_wide > w_tall);
    // 2 * 10 * tan(17.5 deg) is a little over six world units tall
    assert!((h_wide - 6.306).abs() < 0.01);
}
