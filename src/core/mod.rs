pub mod bootstrap;
pub mod camera;
pub mod geometry;
pub mod motion;
pub mod nav;
pub mod particles;

pub use bootstrap::*;
pub use camera::*;
pub use geometry::*;
pub use motion::*;

// Shaders bundled as string constants
pub static WIREFRAME_WGSL: &str = include_str!("../../shaders/wireframe.wgsl");
