use glam::Vec3;

// Page contract and tuning constants.
//
// These constants express intended behavior (smoothing factors, clamp
// limits, palette) and keep magic numbers out of the code. `SceneConfig`
// and `ParticleConfig` defaults are assembled from them.

// DOM contract
pub const SCENE_CONTAINER_ID: &str = "three-container";
pub const PARTICLES_CONTAINER_ID: &str = "particles-js";
pub const REVEAL_SELECTOR: &str = ".scroll-reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Scroll-driven placement
pub const SCROLL_LIMIT_PX: f32 = 500.0; // scroll distance for full progress
pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const END_POSITION: Vec3 = Vec3::new(4.5, 3.0, 0.0); // top right
pub const DEPTH_TRAVEL: f32 = 2.0; // z pushed back at full progress

// Smoothing factors (fraction of remaining error removed per frame)
pub const SCROLL_SMOOTHING: f32 = 0.1;
pub const POINTER_SMOOTHING: f32 = 0.05;
// Gap below which a smoothed value lands on its target; f32 easing alone
// stalls a few ulps short
pub const SETTLE_EPSILON: f32 = 1e-3;

// Pointer response
pub const CAMERA_PARALLAX: f32 = 0.5; // camera x target per unit pointer x
pub const POINTER_ROLL: f32 = 0.25; // mesh z rotation (rad) per unit pointer x

// Continuous spin (rad per frame on x and y)
pub const SPIN_PER_FRAME: f32 = 0.002;
pub const REFERENCE_FPS: f32 = 60.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 18.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Mesh
pub const ICOSAHEDRON_RADIUS: f32 = 9.0;
pub const ICOSAHEDRON_DETAIL: u32 = 1;
pub const MESH_COLOR: u32 = 0x2A62C6;
pub const MESH_SPECULAR: u32 = 0xAAAAAA;
pub const MESH_SHININESS: f32 = 50.0;
pub const MESH_OPACITY: f32 = 0.3;

// Lights
pub const AMBIENT_COLOR: u32 = 0x042476;
pub const AMBIENT_INTENSITY: f32 = 5.0;
pub const LIGHT_COLOR: u32 = 0x042476;
pub const LIGHT_INTENSITY: f32 = 15.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(15.0, 15.0, 15.0);

// Render surface
pub const MSAA_SAMPLES: u32 = 4;

// Particle field
pub const PARTICLE_COUNT: u32 = 60;
pub const PARTICLE_DENSITY_AREA: u32 = 800;
pub const PARTICLE_COLOR: &str = "#4CAF50";
pub const PARTICLE_OPACITY: f32 = 0.5;
pub const PARTICLE_SIZE: f32 = 3.0;
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_COLOR: &str = "#3B82F6";
pub const LINK_OPACITY: f32 = 0.4;
pub const LINK_WIDTH: f32 = 1.0;
pub const PARTICLE_SPEED: f32 = 1.5;
pub const REPULSE_DISTANCE: f32 = 100.0;
pub const REPULSE_DURATION: f32 = 0.4;
pub const PUSH_PARTICLES: u32 = 4;
