// Host-side tests for anchor navigation and reveal toggling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

struct FakeClick {
    href: Option<String>,
    ids: Vec<&'static str>,
    prevented: Cell<bool>,
    scrolled: RefCell<Vec<String>>,
}

impl FakeClick {
    fn new(href: Option<&str>, ids: &[&'static str]) -> Self {
        Self {
            href: href.map(str::to_string),
            ids: ids.to_vec(),
            prevented: Cell::new(false),
            scrolled: RefCell::new(Vec::new()),
        }
    }
}

impl NavigationHost for FakeClick {
    fn nearest_anchor_href(&self) -> Option<String> {
        self.href.clone()
    }
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
    fn scroll_into_view(&self, id: &str) -> bool {
        if self.ids.contains(&id) {
            self.scrolled.borrow_mut().push(id.to_string());
            true
        } else {
            false
        }
    }
}

#[test]
fn fragment_link_scrolls_target_into_view() {
    let click = FakeClick::new(Some("#about"), &["about", "contact"]);
    assert_eq!(handle_anchor_click(&click), ClickOutcome::Scrolled);
    assert!(click.prevented.get());
    assert_eq!(*click.scrolled.borrow(), vec!["about".to_string()]);
}

#[test]
fn bare_hash_is_left_alone() {
    let click = FakeClick::new(Some("#"), &["about"]);
    assert_eq!(handle_anchor_click(&click), ClickOutcome::Ignored);
    assert!(!click.prevented.get());
    assert!(click.scrolled.borrow().is_empty());
}

#[test]
fn click_outside_any_anchor_is_ignored() {
    let click = FakeClick::new(None, &["about"]);
    assert_eq!(handle_anchor_click(&click), ClickOutcome::Ignored);
    assert!(!click.prevented.get());
}

#[test]
fn missing_target_prevents_default_without_scrolling() {
    let click = FakeClick::new(Some("#missing-id"), &["about"]);
    assert_eq!(handle_anchor_click(&click), ClickOutcome::MissingTarget);
    assert!(click.prevented.get());
    assert!(click.scrolled.borrow().is_empty());
}

#[test]
fn anchor_action_parsing() {
    assert_eq!(anchor_action(Some("#top")), AnchorAction::ScrollTo("top".into()));
    assert_eq!(anchor_action(Some("#")), AnchorAction::Ignore);
    assert_eq!(anchor_action(Some("/docs#top")), AnchorAction::Ignore);
    assert_eq!(anchor_action(Some("")), AnchorAction::Ignore);
    assert_eq!(anchor_action(None), AnchorAction::Ignore);
}

#[derive(Clone, Default)]
struct FakeElement(Rc<RefCell<BTreeSet<String>>>);

impl FakeElement {
    fn has(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }
}

impl RevealTarget for FakeElement {
    fn set_class(&self, class: &str, on: bool) {
        let mut classes = self.0.borrow_mut();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

#[test]
fn reveal_toggles_both_ways() {
    let el = FakeElement::default();

    apply_reveal([(el.clone(), true, 0.4)], "is-visible", 0.15);
    assert!(el.has("is-visible"));

    // still partly on screen but under the threshold
    apply_reveal([(el.clone(), true, 0.05)], "is-visible", 0.15);
    assert!(!el.has("is-visible"));

    apply_reveal([(el.clone(), true, 0.15)], "is-visible", 0.15);
    assert!(el.has("is-visible"));

    apply_reveal([(el.clone(), false, 0.0)], "is-visible", 0.15);
    assert!(!el.has("is-visible"));
}

#[test]
fn reveal_batch_updates_each_element_independently() {
    let a = FakeElement::default();
    let b = FakeElement::default();
    apply_reveal(
        vec![(a.clone(), true, 0.9), (b.clone(), false, 0.0)],
        "is-visible",
        0.15,
    );
    assert!(a.has("is-visible"));
    assert!(!b.has("is-visible"));
}

#[test]
fn reveal_threshold_predicate() {
    assert!(is_revealed(true, 0.15, 0.15));
    assert!(!is_revealed(true, 0.1499, 0.15));
    assert!(!is_revealed(false, 1.0, 0.15));
}
