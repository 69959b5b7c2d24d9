// In-page anchor navigation and reveal-on-intersect decisions, written
// against small host traits so the DOM layer only supplies lookups.

/// What a click on a (possibly) fragment link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    Ignore,
    ScrollTo(String),
}

/// Decide from the `href` of the nearest fragment anchor, if any.
/// A bare `#` is left to the browser.
pub fn anchor_action(href: Option<&str>) -> AnchorAction {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(id) if !id.is_empty() => AnchorAction::ScrollTo(id.to_string()),
        _ => AnchorAction::Ignore,
    }
}

/// Host capabilities for one click event.
pub trait NavigationHost {
    /// `href` of the nearest `a[href^="#"]` containing the event target.
    fn nearest_anchor_href(&self) -> Option<String>;
    fn prevent_default(&self);
    /// Smooth-scroll the element with `id` into view; false when it does
    /// not exist.
    fn scroll_into_view(&self, id: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Scrolled,
    MissingTarget,
}

pub fn handle_anchor_click<H: NavigationHost + ?Sized>(host: &H) -> ClickOutcome {
    match anchor_action(host.nearest_anchor_href().as_deref()) {
        AnchorAction::Ignore => ClickOutcome::Ignored,
        AnchorAction::ScrollTo(id) => {
            host.prevent_default();
            if host.scroll_into_view(&id) {
                ClickOutcome::Scrolled
            } else {
                ClickOutcome::MissingTarget
            }
        }
    }
}

/// Element whose presentation class follows its intersection state.
pub trait RevealTarget {
    fn set_class(&self, class: &str, on: bool);
}

/// Visible while intersecting with at least `threshold` of its area.
#[inline]
pub fn is_revealed(is_intersecting: bool, intersection_ratio: f64, threshold: f64) -> bool {
    is_intersecting && intersection_ratio >= threshold
}

/// Apply a batch of observer entries `(target, is_intersecting, ratio)`.
/// Toggles both ways: leaving the viewport removes the class again.
pub fn apply_reveal<T, I>(entries: I, class: &str, threshold: f64)
where
    T: RevealTarget,
    I: IntoIterator<Item = (T, bool, f64)>,
{
    for (target, is_intersecting, ratio) in entries {
        target.set_class(class, is_revealed(is_intersecting, ratio, threshold));
    }
}
