//! `web-sys` backed viewport and scroll source

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{
    ScrollHandler, ScrollSource, ScrollSubscription, SectionBounds, SectionId, ViewportGeometry,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// The browser window. Sections are looked up by DOM id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl ViewportGeometry for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

impl ScrollSource for BrowserViewport {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        let handle = window_event_listener(ev::scroll, move |_| handler());
        ScrollSubscription::new(move || handle.remove())
    }
}
