use crate::core::{PerspectiveCamera, SceneState, ViewportSignal};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scene objects owned by the page: pure motion state plus the camera,
/// canvas and GPU resources it drives.
pub struct SceneContext {
    pub state: SceneState,
    pub camera: PerspectiveCamera,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    /// Normalized pointer X written by the pointer-move listener.
    pub pointer_x: Rc<Cell<f32>>,
    pub last_instant: Instant,
    pub frames: u64,
}

impl SceneContext {
    pub fn frame(&mut self, window: &web::Window) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let signal = dom::viewport_signal(window, self.pointer_x.get());
        // zoom changes the pixel ratio without a resize event
        if signal.backing_size() != (self.canvas.width(), self.canvas.height()) {
            self.resize(&signal);
        }
        self.state.step(&signal, dt_sec);
        self.camera.position.x = self.state.camera_x;

        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "[frame] {} progress={:.3} pos=({:.2},{:.2},{:.2}) cam_x={:.3}",
                self.frames,
                self.state.progress,
                self.state.transform.position.x,
                self.state.transform.position.y,
                self.state.transform.position.z,
                self.state.camera_x
            );
        }

        match self.gpu.render(&self.camera, &self.state.transform) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Keep camera aspect and render-surface size in step with the window.
    pub fn resize(&mut self, viewport: &ViewportSignal) {
        self.camera.set_viewport(viewport.width, viewport.height);
        dom::size_canvas(&self.canvas, viewport);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<SceneContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        frame_ctx.borrow_mut().frame(&w);
        if let Some(cb) = tick_clone.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
