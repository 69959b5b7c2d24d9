use crate::constants::{ICOSAHEDRON_DETAIL, ICOSAHEDRON_RADIUS, SCENE_CONTAINER_ID};
use crate::core::{icosahedron, FeatureStatus, PerspectiveCamera, SceneConfig, SceneState};
use crate::dom;
use crate::events;
use crate::frame::{self, SceneContext};
use crate::render::GpuState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the canvas, GPU state, camera and mesh inside `#three-container`,
/// wire resize/pointer listeners and start the frame loop.
///
/// A missing container skips the scene without error; anything else that
/// fails before the loop starts is returned and the loop is never scheduled.
pub async fn init(config: SceneConfig) -> anyhow::Result<FeatureStatus> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(container) = document.get_element_by_id(SCENE_CONTAINER_ID) else {
        return Ok(FeatureStatus::Skipped("missing #three-container"));
    };

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let viewport = dom::viewport_signal(&window, 0.0);
    dom::size_canvas(&canvas, &viewport);
    container.append_child(&canvas).map_err(dom::js_err)?;

    let mesh = icosahedron(ICOSAHEDRON_RADIUS, ICOSAHEDRON_DETAIL);
    let gpu = match GpuState::new(&canvas, &mesh, &config.palette).await {
        Ok(g) => g,
        Err(e) => {
            // leave the page as it was
            _ = container.remove_child(&canvas);
            return Err(e.context("WebGPU init"));
        }
    };

    let pointer_x = Rc::new(Cell::new(0.0_f32));
    let scene = Rc::new(RefCell::new(SceneContext {
        state: SceneState::new(config),
        camera: PerspectiveCamera::new(viewport.aspect()),
        canvas,
        gpu,
        pointer_x: pointer_x.clone(),
        last_instant: Instant::now(),
        frames: 0,
    }));

    events::wire_resize(&window, scene.clone())?;
    events::wire_pointer_move(&document, pointer_x)?;

    frame::start_loop(scene);
    Ok(FeatureStatus::Started)
}
