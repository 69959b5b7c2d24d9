use crate::constants::{ANCHOR_SELECTOR, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use crate::core::nav::{self, ClickOutcome, NavigationHost, RevealTarget};
use crate::core::FeatureStatus;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct ClickHost<'a> {
    document: &'a web::Document,
    event: &'a web::MouseEvent,
}

impl NavigationHost for ClickHost<'_> {
    fn nearest_anchor_href(&self) -> Option<String> {
        let target = self.event.target()?;
        let el = target.dyn_ref::<web::Element>()?;
        el.closest(ANCHOR_SELECTOR)
            .ok()
            .flatten()
            .and_then(|a| a.get_attribute("href"))
    }

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
                true
            }
            None => false,
        }
    }
}

impl RevealTarget for web::Element {
    fn set_class(&self, class: &str, on: bool) {
        _ = self.class_list().toggle_with_force(class, on);
    }
}

/// One delegated document click listener for `a[href^="#"]` links.
pub fn wire_anchor_navigation(document: &web::Document) -> anyhow::Result<()> {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let host = ClickHost {
            document: &doc,
            event: &ev,
        };
        if nav::handle_anchor_click(&host) == ClickOutcome::MissingTarget {
            log::debug!("[nav] fragment target not found");
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}

/// Observe every `.scroll-reveal` element with one shared observer.
/// Returns how many elements are observed.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<u32> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let batch = entries.iter().filter_map(|v| {
                let entry = v.dyn_into::<web::IntersectionObserverEntry>().ok()?;
                Some((
                    entry.target(),
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                ))
            });
            nav::apply_reveal(batch, REVEAL_VISIBLE_CLASS, REVEAL_THRESHOLD);
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    callback.forget();

    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(dom::js_err)?;
    let mut observed = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            observer.observe(&el);
            observed += 1;
        }
    }
    Ok(observed)
}

/// Anchor navigation plus reveal-on-intersect.
pub fn init(document: &web::Document) -> anyhow::Result<FeatureStatus> {
    wire_anchor_navigation(document)?;
    let observed = wire_reveal(document)?;
    log::debug!("[reveal] observing {} elements", observed);
    Ok(FeatureStatus::Started)
}
