use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Passive document `mousemove`: only the normalized pointer X is written.
pub fn wire_pointer_move(document: &web::Document, pointer_x: Rc<Cell<f32>>) -> anyhow::Result<()> {
    dom::add_passive_listener(document, "mousemove", move |ev: web::MouseEvent| {
        if let Some(w) = web::window() {
            pointer_x.set(dom::pointer_x_from_event(&w, &ev));
        }
    })
}
