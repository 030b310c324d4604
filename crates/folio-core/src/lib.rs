pub mod constants;
pub mod guestbook;
pub mod physics;
pub mod scene;
pub mod state;

// Shader bundled as a string constant, shared by the web and native frontends
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use guestbook::*;
pub use physics::*;
pub use scene::*;
pub use state::*;
