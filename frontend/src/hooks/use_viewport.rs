use gloo::events::EventListener;
use yew::prelude::*;

use crate::config::{MOBILE_BREAKPOINT_PX, NAV_OFFSET_PX};

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn inner_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX + 1.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Tracks whether the page has scrolled past `threshold` pixels
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| scroll_y() > threshold);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            scrolled.set(scroll_y() > threshold);
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    scrolled.set(scroll_y() > threshold);
                })
            });
            move || drop(listener)
        });
    }

    *scrolled
}

/// True while the viewport is narrower than the mobile breakpoint
#[hook]
pub fn use_is_mobile() -> bool {
    let mobile = use_state(|| inner_width() < MOBILE_BREAKPOINT_PX);

    {
        let mobile = mobile.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    mobile.set(inner_width() < MOBILE_BREAKPOINT_PX);
                })
            });
            move || drop(listener)
        });
    }

    *mobile
}

/// Smooth-scrolls to the element with the given id, leaving room for the
/// fixed navigation bar. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::debug!("navigation: no section with id '{}'", id);
        return;
    };

    let top = element.get_bounding_client_rect().top() + scroll_y() - NAV_OFFSET_PX;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
