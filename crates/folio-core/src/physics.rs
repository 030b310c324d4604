//! Per-object kinematics for the floating keycaps.
//!
//! In the free-floating phases each object integrates its own velocity,
//! reflects off the viewport walls and is pushed away from the pointer. In
//! every other phase it eases back toward its resting pose. The kinematic
//! record survives phase changes; nothing is reset when the scene pins and
//! later releases the objects.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::*;

/// Mutable kinematic record for one floating object.
#[derive(Clone, Debug, PartialEq)]
pub struct Kinematics {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
}

impl Kinematics {
    /// Draw an initial state from the spawn envelope.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let signed = |rng: &mut dyn RngCore, half: f32| (rng.gen::<f32>() * 2.0 - 1.0) * half;
        Self {
            position: Vec3::new(
                signed(rng, SPAWN_POS_HALF.x),
                signed(rng, SPAWN_POS_HALF.y),
                signed(rng, SPAWN_POS_HALF.z),
            ),
            velocity: Vec3::new(
                signed(rng, SPAWN_VEL_HALF.x),
                signed(rng, SPAWN_VEL_HALF.y),
                signed(rng, SPAWN_VEL_HALF.z),
            ),
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::new(
                signed(rng, SPAWN_SPIN_HALF),
                signed(rng, SPAWN_SPIN_HALF),
                signed(rng, SPAWN_SPIN_HALF),
            ),
        }
    }
}

/// Axis-aligned region the free-floating objects bounce inside. The x/y
/// half-extents track the visible viewport; z is a fixed slab in front of
/// and behind the focal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatBounds {
    pub half_width: f32,
    pub half_height: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl FloatBounds {
    pub fn from_viewport(world_width: f32, world_height: f32) -> Self {
        Self {
            half_width: (world_width * 0.5).max(0.1),
            half_height: (world_height * 0.5).max(0.1),
            z_min: FLOAT_Z_MIN,
            z_max: FLOAT_Z_MAX,
        }
    }
}

/// World-space viewport size at the z = 0 plane for the fixed camera.
pub fn world_viewport(aspect: f32) -> (f32, f32) {
    let height = 2.0 * CAMERA_Z * (CAMERA_FOV_Y * 0.5).tan();
    (height * aspect.max(0.01), height)
}

/// Smoothing coefficient for one frame: `1 - exp(-dt / tau)`. Compounding
/// this over any subdivision of an interval gives the same total decay, so
/// easing speed does not depend on frame rate.
#[inline]
pub fn ease_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    1.0 - (-dt_sec / tau_sec.max(1e-6)).exp()
}

/// One free-float step: integrate, reflect off the walls, repel from the
/// pointer, clamp speed, spin.
pub fn step_free(kin: &mut Kinematics, bounds: FloatBounds, pointer_world: Option<Vec3>, dt: f32) {
    kin.position += kin.velocity * dt;

    // Perfectly elastic walls: flip the offending axis, keep the magnitude
    if kin.position.x.abs() > bounds.half_width {
        kin.velocity.x = -kin.velocity.x;
    }
    if kin.position.y.abs() > bounds.half_height {
        kin.velocity.y = -kin.velocity.y;
    }
    if kin.position.z > bounds.z_max || kin.position.z < bounds.z_min {
        kin.velocity.z = -kin.velocity.z;
    }

    if let Some(pointer) = pointer_world {
        let away = kin.position - pointer;
        let dist = away.length();
        if dist < REPEL_RADIUS && dist > 1e-4 {
            kin.velocity += away / dist * REPEL_ACCEL * dt;
        }
    }

    // Repulsion has no natural ceiling; without this an object camped under
    // the pointer winds up arbitrarily fast.
    let speed = kin.velocity.length();
    if speed > MAX_FLOAT_SPEED {
        kin.velocity *= MAX_FLOAT_SPEED / speed;
    }

    kin.rotation += kin.angular_velocity * dt;
}

/// One pinned-phase step: position and rotation decay toward the slot
/// origin. Velocity is left untouched so releasing the objects resumes the
/// drift they had before.
pub fn ease_to_rest(kin: &mut Kinematics, dt: f32) {
    let keep = 1.0 - ease_alpha(dt, REST_EASE_TAU_SEC);
    kin.position *= keep;
    kin.rotation *= keep;
}
