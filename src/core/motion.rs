// Per-frame scene motion: scroll tracking, scroll-driven placement, spin,
// pointer roll and camera parallax. Platform-free so it can be stepped from
// host tests as well as from the browser frame loop.

use crate::constants::*;
use glam::Vec3;

/// Plain numeric snapshot of the browser viewport for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSignal {
    /// Pointer X normalized to \[-1, 1\] across the window width.
    pub pointer_x: f32,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_offset: f32,
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Default for ViewportSignal {
    fn default() -> Self {
        Self {
            pointer_x: 0.0,
            scroll_offset: 0.0,
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
        }
    }
}

impl ViewportSignal {
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Render-target size in device pixels: CSS size times the capped ratio.
    pub fn backing_size(&self) -> (u32, u32) {
        let ratio = if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        let scale = |css: u32| ((css.max(1) as f32 * ratio) as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

/// Map a client-space pointer X to \[-1, 1\]. A zero-width viewport yields 0.
#[inline]
pub fn normalize_pointer_x(client_x: f64, viewport_width: f64) -> f32 {
    if viewport_width <= 0.0 || !client_x.is_finite() {
        return 0.0;
    }
    ((client_x / viewport_width) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32
}

/// Device pixel ratio capped for fill-rate.
#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Move `current` toward `target` by `factor` of the remaining error,
/// landing exactly on `target` once within `SETTLE_EPSILON`.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    let gap = target - current;
    if gap.abs() <= SETTLE_EPSILON {
        return target;
    }
    current + gap * factor
}

/// Scroll completion ratio in \[0, 1\].
#[inline]
pub fn scroll_progress(current_scroll: f32, scroll_limit: f32) -> f32 {
    if scroll_limit <= 0.0 {
        return 1.0;
    }
    (current_scroll / scroll_limit).clamp(0.0, 1.0)
}

/// Scroll-driven mesh placement. x/y blend `start` to `end` (exact at both
/// ends); z is pushed back by `progress * depth_travel` from `start.z`.
#[inline]
pub fn placement(start: Vec3, end: Vec3, progress: f32, depth_travel: f32) -> Vec3 {
    let keep = 1.0 - progress;
    Vec3::new(
        start.x * keep + end.x * progress,
        start.y * keep + end.y * progress,
        start.z + progress * depth_travel,
    )
}

/// How the continuous spin advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinMode {
    /// Fixed increment per displayed frame; spin speed follows the refresh rate.
    #[default]
    PerFrame,
    /// Increment scaled by measured frame time relative to `REFERENCE_FPS`.
    TimeScaled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mesh: u32,
    pub ambient: u32,
    pub light: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            mesh: MESH_COLOR,
            ambient: AMBIENT_COLOR,
            light: LIGHT_COLOR,
        }
    }
}

/// Read-only scene tuning, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub scroll_limit: f32,
    pub start: Vec3,
    pub end: Vec3,
    pub depth_travel: f32,
    pub scroll_smoothing: f32,
    pub pointer_smoothing: f32,
    pub camera_parallax: f32,
    pub pointer_roll: f32,
    pub spin_per_frame: f32,
    pub spin_mode: SpinMode,
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scroll_limit: SCROLL_LIMIT_PX,
            start: START_POSITION,
            end: END_POSITION,
            depth_travel: DEPTH_TRAVEL,
            scroll_smoothing: SCROLL_SMOOTHING,
            pointer_smoothing: POINTER_SMOOTHING,
            camera_parallax: CAMERA_PARALLAX,
            pointer_roll: POINTER_ROLL,
            spin_per_frame: SPIN_PER_FRAME,
            spin_mode: SpinMode::PerFrame,
            palette: Palette::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
}

impl ScrollState {
    pub fn advance(&mut self, target: f32, factor: f32) -> f32 {
        self.target = target;
        self.current = smooth_toward(self.current, target, factor);
        self.current
    }
}

/// Mesh transform; rotation is Euler XYZ in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Everything the frame loop mutates, owned in one place.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub config: SceneConfig,
    pub scroll: ScrollState,
    pub transform: TransformState,
    pub pointer_x: f32,
    pub camera_x: f32,
    pub progress: f32,
}

impl SceneState {
    pub fn new(config: SceneConfig) -> Self {
        let transform = TransformState {
            position: config.start,
            rotation: Vec3::ZERO,
        };
        Self {
            config,
            scroll: ScrollState::default(),
            transform,
            pointer_x: 0.0,
            camera_x: 0.0,
            progress: 0.0,
        }
    }

    /// Advance one display frame. `dt_sec` is only read in
    /// `SpinMode::TimeScaled`.
    pub fn step(&mut self, signal: &ViewportSignal, dt_sec: f32) {
        let cfg = &self.config;

        let current = self
            .scroll
            .advance(signal.scroll_offset, cfg.scroll_smoothing);
        self.progress = scroll_progress(current, cfg.scroll_limit);
        self.transform.position = placement(cfg.start, cfg.end, self.progress, cfg.depth_travel);

        let spin = match cfg.spin_mode {
            SpinMode::PerFrame => cfg.spin_per_frame,
            SpinMode::TimeScaled => cfg.spin_per_frame * dt_sec.max(0.0) * REFERENCE_FPS,
        };
        self.transform.rotation.x += spin;
        self.transform.rotation.y += spin;

        self.pointer_x = smooth_toward(self.pointer_x, signal.pointer_x, cfg.pointer_smoothing);
        self.transform.rotation.z = self.pointer_x * cfg.pointer_roll;

        self.camera_x = smooth_toward(
            self.camera_x,
            signal.pointer_x * cfg.camera_parallax,
            cfg.pointer_smoothing,
        );
    }
}
