pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod mesh;
pub mod metrics;
pub mod scene;
pub mod store;
pub mod texture;

pub use camera::*;
pub use config::*;
pub use error::PlannerError;
pub use mesh::*;
pub use metrics::*;
pub use scene::*;
pub use store::*;
pub use texture::GrainTexture;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
