use crate::scroll::{self, SectionBounds};
use crate::theme::{Theme, ThemeStore, THEME_KEY};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Function, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Storage,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

/// Where a page keeps its `data-theme` attribute.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ThemeRoot {
    Body,
    DocumentElement,
}

pub fn apply_theme(theme: Theme, root: ThemeRoot) {
    let Some(document) = document() else {
        return;
    };
    let element: Option<Element> = match root {
        ThemeRoot::Body => document.body().map(Into::into),
        ThemeRoot::DocumentElement => document.document_element(),
    };

    if let Some(element) = element {
        let _ = element.set_attribute("data-theme", theme.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme_with_transition(theme: Theme, root: ThemeRoot) {
    if prefers_reduced_motion() {
        apply_theme(theme, root);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme, root);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme, root);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme, root);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme, root));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme, root);
    }
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Window scroll subscription that coalesces bursts of `scroll` events into at
/// most one `on_frame` call per animation frame. Dropping it unsubscribes.
pub struct ScrollFrames {
    _listener: EventListener,
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

pub fn on_scroll_frames(on_frame: impl Fn() + 'static) -> Option<ScrollFrames> {
    let win = window()?;
    let on_frame = Rc::new(on_frame);
    let scheduled = Rc::new(Cell::new(false));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

    let listener = {
        let frame = frame.clone();
        EventListener::new(&win, "scroll", move |_| {
            if scheduled.replace(true) {
                return;
            }
            let on_frame = on_frame.clone();
            let scheduled = scheduled.clone();
            // Only reached after the previous frame has fired.
            *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                scheduled.set(false);
                on_frame();
            }));
        })
    };

    Some(ScrollFrames {
        _listener: listener,
        _frame: frame,
    })
}

fn element_offset_top(id: &str) -> Option<f64> {
    let element = document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

pub fn smooth_scroll_to_section(id: &str) -> bool {
    let Some(offset_top) = element_offset_top(id) else {
        return false;
    };
    let Some(win) = window() else {
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll::anchor_scroll_target(offset_top));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn scroll_into_view(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
        })
        .collect()
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn event_target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

pub fn is_text_field(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn location_href() -> Option<String> {
    window()?.location().href().ok()
}

pub fn location_origin() -> Option<String> {
    window()?.location().origin().ok()
}

pub fn navigate(url: &str) {
    if let Some(win) = window() {
        let _ = win.location().set_href(url);
    }
}

pub fn go_back_or_home() {
    let referrer = document().map(|d| d.referrer()).unwrap_or_default();
    let Some(win) = window() else {
        return;
    };

    if referrer.is_empty() {
        let _ = win.location().set_href("/");
    } else if let Ok(history) = win.history() {
        let _ = history.back();
    }
}

pub fn document_loaded() -> bool {
    document()
        .and_then(|d| Reflect::get(&d, &JsValue::from_str("readyState")).ok())
        .and_then(|state| state.as_string())
        .map(|state| state == "complete")
        .unwrap_or(false)
}

pub fn focus(element: &HtmlElement) {
    let _ = element.focus();
}

pub fn millis(duration: std::time::Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
