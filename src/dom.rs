use crate::core::{effective_pixel_ratio, normalize_pointer_x, ViewportSignal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Window inner size in CSS pixels, at least 1x1.
pub fn inner_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let w = read(window.inner_width()).max(1.0) as u32;
    let h = read(window.inner_height()).max(1.0) as u32;
    (w, h)
}

pub fn pixel_ratio(window: &web::Window) -> f64 {
    effective_pixel_ratio(window.device_pixel_ratio())
}

/// Snapshot of the viewport for this frame; the pointer comes from the
/// pointer-move listener since the window cannot be polled for it.
pub fn viewport_signal(window: &web::Window, pointer_x: f32) -> ViewportSignal {
    let (width, height) = inner_size(window);
    ViewportSignal {
        pointer_x,
        scroll_offset: window.scroll_y().unwrap_or(0.0) as f32,
        width,
        height,
        pixel_ratio: pixel_ratio(window) as f32,
    }
}

#[inline]
pub fn pointer_x_from_event(window: &web::Window, ev: &web::MouseEvent) -> f32 {
    let (width, _) = inner_size(window);
    normalize_pointer_x(ev.client_x() as f64, width as f64)
}

/// Size the canvas backing store to the signal's device-pixel size and its
/// CSS box to the window's inner size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: &ViewportSignal) {
    let (backing_w, backing_h) = viewport.backing_size();
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    _ = style.set_property("display", "block");
}

/// Register a listener that never calls `preventDefault`, letting the
/// browser keep scrolling on the compositor thread.
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Run `f` once the page has finished loading (immediately if it already has).
pub fn on_load(f: impl FnOnce() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() == Some("complete") {
        f();
        return Ok(());
    }
    let closure = Closure::once(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}
