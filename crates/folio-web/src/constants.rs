// Front-end wiring constants.

// Seed for the keycap drift; fixed so reloads look the same
pub const SCENE_SEED: u64 = 42;

// DOM ids the front-end binds to
pub const CANVAS_ID: &str = "scene-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const TOAST_ID: &str = "toast";

// How long an error toast stays up
pub const TOAST_HIDE_MS: i32 = 4000;
