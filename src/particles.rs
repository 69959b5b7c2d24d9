use crate::constants::PARTICLES_CONTAINER_ID;
use crate::core::particles::ParticleConfig;
use crate::core::FeatureStatus;
use crate::dom;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = particlesJS)]
    fn particles_js(tag_id: &str, params: &JsValue) -> Result<(), JsValue>;
}

fn engine_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("particlesJS"))
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// Hand the fixed particle configuration to particles.js, bound to
/// `#particles-js`. Nothing is mutated afterwards.
pub fn init(document: &web::Document, config: &ParticleConfig) -> anyhow::Result<FeatureStatus> {
    if document.get_element_by_id(PARTICLES_CONTAINER_ID).is_none() {
        return Ok(FeatureStatus::Skipped("missing #particles-js"));
    }
    if !engine_loaded() {
        anyhow::bail!("particlesJS is not loaded");
    }
    let json = config.to_json()?;
    let params = js_sys::JSON::parse(&json).map_err(dom::js_err)?;
    particles_js(PARTICLES_CONTAINER_ID, &params).map_err(dom::js_err)?;
    Ok(FeatureStatus::Started)
}
