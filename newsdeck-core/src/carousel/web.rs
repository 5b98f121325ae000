//! Browser DOM bindings for the carousel controller.

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use super::events::{NavEvent, NavKey};
use super::host::{
    CarouselHost, FrameScheduler, GapStyle, ListenTarget, NavControl,
    NavHandler, TrackElement,
};
use super::init::init_carousels;
use crate::settings::CarouselSettings;

const WRAPPER_CLASS: &str = "nlp-wrapper";
const TRACK_CLASS: &str = "nlp-carousel";
const ITEM_SELECTOR: &str = ".nlp-item";

fn first_by_class(parent: &Element, class: &str) -> Option<Element> {
    parent.get_elements_by_class_name(class).item(0)
}

fn nav_event(event: &Event) -> Option<NavEvent> {
    match event.type_().as_str() {
        "click" => Some(NavEvent::Click),
        "keydown" => event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| NavEvent::KeyDown(NavKey::from_dom_key(&key.key()))),
        _ => None,
    }
}

/// `.nlp-carousel` element of a rendered listing.
#[derive(Debug, Clone)]
pub struct WebTrack {
    element: HtmlElement,
    window: Window,
}

impl TrackElement for WebTrack {
    fn scroll_left(&self) -> f64 {
        f64::from(self.element.scroll_left())
    }

    fn set_scroll_left(&self, value: f64) {
        // Fractional offsets through the property; `set_scroll_left` takes i32.
        if let Err(err) = Reflect::set(
            &self.element,
            &JsValue::from_str("scrollLeft"),
            &JsValue::from_f64(value),
        ) {
            tracing::warn!(?err, "failed to set scrollLeft");
        }
    }

    fn scroll_width(&self) -> f64 {
        f64::from(self.element.scroll_width())
    }

    fn client_width(&self) -> f64 {
        f64::from(self.element.client_width())
    }

    fn first_item_width(&self) -> Option<f64> {
        let item = self.element.query_selector(ITEM_SELECTOR).ok().flatten()?;
        Some(item.get_bounding_client_rect().width())
    }

    fn gap_style(&self) -> GapStyle {
        let Ok(Some(style)) = self.window.get_computed_style(&self.element) else {
            return GapStyle::default();
        };
        GapStyle {
            column_gap: style.get_property_value("column-gap").unwrap_or_default(),
            gap: style.get_property_value("gap").unwrap_or_default(),
        }
    }

    fn smooth_scroll_to(&self, left: f64) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        self.element.scroll_to_with_scroll_to_options(&options);
    }
}

/// `requestAnimationFrame` clock.
#[derive(Debug, Clone)]
pub struct WebFrames {
    window: Window,
}

impl FrameScheduler for WebFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(err) = self
            .window
            .request_animation_frame(closure.unchecked_ref())
        {
            tracing::warn!(?err, "requestAnimationFrame failed");
        }
    }
}

/// A browser window and its document.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Host for the global `window`, if there is one.
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    pub fn document_root(&self) -> Option<Element> {
        self.window.document()?.document_element()
    }

    fn add_listener(
        target: &web_sys::EventTarget,
        event_types: &[&str],
        handler: NavHandler,
    ) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(nav) = nav_event(&event) else {
                return;
            };
            if handler(&nav).prevent_default {
                event.prevent_default();
            }
        });
        for event_type in event_types {
            if let Err(err) = target.add_event_listener_with_callback(
                event_type,
                callback.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(?err, event_type, "failed to add carousel listener");
            }
        }
        // Listeners live as long as the page.
        callback.forget();
    }
}

impl CarouselHost for WebHost {
    type Node = Element;
    type Track = WebTrack;
    type Frames = WebFrames;

    fn wrappers(&self, root: &Element) -> Vec<Element> {
        let found = root.get_elements_by_class_name(WRAPPER_CLASS);
        (0..found.length()).filter_map(|i| found.item(i)).collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            tracing::warn!(?err, name, "failed to set attribute");
        }
    }

    fn track(&self, wrapper: &Element) -> Option<WebTrack> {
        let element = first_by_class(wrapper, TRACK_CLASS)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(WebTrack {
            element,
            window: self.window.clone(),
        })
    }

    fn control(&self, wrapper: &Element, control: NavControl) -> Option<Element> {
        first_by_class(wrapper, control.class_name())
    }

    fn listen(&self, target: ListenTarget<Element, WebTrack>, handler: NavHandler) {
        match target {
            ListenTarget::Control(node, _) => {
                Self::add_listener(&node, &["click", "keydown"], handler)
            }
            ListenTarget::Track(track) => {
                Self::add_listener(&track.element, &["keydown"], handler)
            }
        }
    }

    fn supports_smooth_scroll(&self) -> bool {
        let Some(root) = self
            .document_root()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior"))
            .unwrap_or(false)
    }

    fn frames(&self) -> WebFrames {
        WebFrames {
            window: self.window.clone(),
        }
    }
}

fn init_under(root: Option<Element>, settings: &CarouselSettings) -> Result<usize, JsValue> {
    let host = WebHost::from_global()
        .ok_or_else(|| JsValue::from_str("no global window"))?;
    let root = match root {
        Some(root) => root,
        None => host
            .document_root()
            .ok_or_else(|| JsValue::from_str("no document element"))?,
    };
    Ok(init_carousels(&host, &root, settings).len())
}

/// Wire every carousel under `root` (the whole document when omitted) that
/// is not wired yet and return how many were. `settingsJson` optionally
/// overrides [`CarouselSettings`].
#[wasm_bindgen(js_name = initCarousels)]
pub fn init_carousels_js(
    root: Option<Element>,
    settings_json: Option<String>,
) -> Result<u32, JsValue> {
    let settings = match settings_json.as_deref() {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {e}")))?,
        _ => CarouselSettings::default(),
    };
    let wired = init_under(root, &settings)?;
    Ok(u32::try_from(wired).unwrap_or(u32::MAX))
}

/// Wire carousels on module start and again once the document has loaded.
#[wasm_bindgen(start)]
pub fn start() {
    let settings = CarouselSettings::default();
    if let Err(err) = init_under(None, &settings) {
        tracing::debug!(?err, "carousel init on start skipped");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = init_under(None, &settings) {
            tracing::warn!(?err, "carousel init on DOMContentLoaded failed");
        }
    });
    if let Err(err) = document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
    ) {
        tracing::warn!(?err, "failed to register DOMContentLoaded");
    }
}
