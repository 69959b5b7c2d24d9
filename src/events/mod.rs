use crate::dom;
use crate::frame::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod pointer;

pub use pointer::wire_pointer_move;

/// Passive window `resize`: camera aspect and surface size follow the window.
pub fn wire_resize(window: &web::Window, scene: Rc<RefCell<SceneContext>>) -> anyhow::Result<()> {
    let w = window.clone();
    dom::add_passive_listener(window, "resize", move |_ev: web::Event| {
        let mut scene = scene.borrow_mut();
        let viewport = dom::viewport_signal(&w, scene.pointer_x.get());
        scene.resize(&viewport);
        log::debug!(
            "[resize] {}x{} @{:.2}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
    })
}
