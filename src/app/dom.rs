use leptos::{ev::KeyboardEvent, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::focus::{wrap_tab, FOCUSABLE};
use crate::nav::{Bounds, Section};

pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section #{}", section.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn section_bounds() -> Vec<(Section, Option<Bounds>)> {
    let doc = document();
    Section::ALL
        .into_iter()
        .map(|s| {
            let bounds = doc.get_element_by_id(s.id()).map(|el| {
                let rect = el.get_bounding_client_rect();
                Bounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                }
            });
            (s, bounds)
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Toggles page scrolling behind an open dialog.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("couldn't set body overflow: {e:?}");
    }
}

pub fn active_element() -> Option<HtmlElement> {
    document()
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn focus(el: &HtmlElement) {
    if let Err(e) = el.focus() {
        log::debug!("couldn't move focus: {e:?}");
    }
}

fn focusables(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn focus_first(container: &Element) {
    if let Some(first) = focusables(container).first() {
        focus(first);
    }
}

/// Keeps Tab / Shift+Tab cycling inside `container`.
pub fn trap_tab(container: &Element, ev: &KeyboardEvent) {
    if ev.key() != "Tab" {
        return;
    }
    let items = focusables(container);
    let current = document().active_element().and_then(|active| {
        items.iter().position(|el| {
            let el: &Element = el.as_ref();
            *el == active
        })
    });
    if let Some(i) = wrap_tab(current, items.len(), ev.shift_key()) {
        ev.prevent_default();
        focus(&items[i]);
    }
}
