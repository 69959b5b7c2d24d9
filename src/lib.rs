#![cfg(target_arch = "wasm32")]
use crate::core::particles::ParticleConfig;
use crate::core::{run_all, FeatureReport, FeatureStatus, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod particles;
mod render;
mod reveal;
mod scene;

type Initializer = Box<dyn FnOnce() -> anyhow::Result<FeatureStatus>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("icosa-backdrop starting");

    if let Err(e) = dom::on_load(init) {
        log::warn!("visual effects disabled: {:#}", e);
    }
    Ok(())
}

/// Each feature gets its own failure boundary; none of them can keep the
/// others from starting.
fn init() {
    let Some(document) = dom::window_document() else {
        log::warn!("visual effects disabled: no document");
        return;
    };

    let doc_particles = document.clone();
    let doc_reveal = document.clone();
    let inits: [(&'static str, Initializer); 2] = [
        (
            "particles",
            Box::new(move || particles::init(&doc_particles, &ParticleConfig::default())),
        ),
        ("reveal", Box::new(move || reveal::init(&doc_reveal))),
    ];
    let reports = run_all(inits);
    let running = reports.iter().filter(|r| r.is_running()).count();
    log::debug!("[init] {}/{} sync features running", running, reports.len());

    // WebGPU setup is async; it reports on its own when done.
    spawn_local(async move {
        FeatureReport::from_result("scene", scene::init(SceneConfig::default()).await);
    });
}
