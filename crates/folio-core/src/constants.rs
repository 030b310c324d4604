use glam::Vec3;

// Shared scene/interaction tuning used by both the web and native frontends.

// Camera: fixed look-at from z = 10 with a 35 degree vertical field of view,
// matching the page framing the scene was designed around.
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_Y: f32 = 35.0 * core::f32::consts::PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Scene phase thresholds, in viewport heights. Evaluated lowest to highest;
// the last one exceeded wins. No hysteresis: rapid scroll near a boundary can
// flip the phase on consecutive events.
pub const PHASE_THRESHOLDS: [f32; 4] = [0.5, 1.5, 3.5, 6.5];

// Overlay visibility windows, in viewport heights. Deliberately out of phase
// with PHASE_THRESHOLDS so section text crossfades around each 3D transition
// instead of cutting on the same scroll position.
pub const OVERLAY_INTRO_END: f32 = 0.5;
pub const OVERLAY_PROFILE: (f32, f32) = (0.5, 1.5);
pub const OVERLAY_SKILLS: (f32, f32) = (1.8, 3.5);
pub const OVERLAY_PROJECTS: (f32, f32) = (3.5, 6.2);
pub const OVERLAY_GUESTBOOK_START: f32 = 6.2;

// Keycap grid: 5 columns, 0.9 world units apart, centered on the board
pub const GRID_COLUMNS: usize = 5;
pub const GRID_SPACING: f32 = 0.9;

// Keycap footprint and the pick-sphere radius used for pointer hit tests
pub const KEYCAP_SIZE: f32 = 0.85;
pub const PICK_RADIUS: f32 = 0.55;
// Highlighted keys sink into the board like a pressed key
pub const KEYCAP_PRESS_DEPTH: f32 = 0.15;

// Chassis plate shown under the grid in the pinned phases
pub const CHASSIS_SIZE: f32 = 4.8;
pub const CHASSIS_OFFSET: Vec3 = Vec3::new(0.0, -0.3, 0.0);
pub const CHASSIS_COLOR: [f32; 3] = [0.04, 0.04, 0.04];

// Device classing: world-space viewport width (at z = 0) below which the
// scene is laid out for a narrow screen, and the scale it shrinks to there.
pub const NARROW_VIEWPORT_WORLD: f32 = 6.0;
pub const NARROW_SCALE_FACTOR: f32 = 0.65;

// Free-float region along z; x/y bounds come from the viewport
pub const FLOAT_Z_MIN: f32 = -5.0;
pub const FLOAT_Z_MAX: f32 = 2.0;

// Spawn envelope for position, velocity (units/sec) and spin (radians/sec)
pub const SPAWN_POS_HALF: Vec3 = Vec3::new(5.0, 5.0, 2.5);
pub const SPAWN_VEL_HALF: Vec3 = Vec3::new(1.5, 1.5, 0.6);
pub const SPAWN_SPIN_HALF: f32 = 0.6;

// Pointer repulsion: objects within the radius accelerate away from the
// pointer's z = 0 projection
pub const REPEL_RADIUS: f32 = 3.0;
pub const REPEL_ACCEL: f32 = 54.0;

// Hard speed ceiling. Repulsion impulses otherwise accumulate without bound
// when the pointer shadows an object for many frames.
pub const MAX_FLOAT_SPEED: f32 = 6.0;

// Easing time constants (seconds). Applied as alpha = 1 - exp(-dt / tau) so
// the settle rate does not depend on the display refresh rate.
pub const REST_EASE_TAU_SEC: f32 = 0.16;
pub const POSE_EASE_TAU_SEC: f32 = 0.35;
pub const CHASSIS_EASE_TAU_SEC: f32 = 0.35;

// Automatic highlight cycling interval on narrow viewports
pub const HIGHLIGHT_CYCLE_SEC: f32 = 1.5;
