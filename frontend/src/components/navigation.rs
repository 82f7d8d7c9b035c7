use yew::prelude::*;

use crate::hooks::use_booking_modal::use_booking_modal;
use crate::hooks::use_viewport::{scroll_to_section, use_scrolled_past};

const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// (label, section id, icon)
pub const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("About", "about", "👥"),
    ("Solutions", "solutions", "▦"),
    ("Demo", "demo", "▶"),
    ("Case Study", "case-study", "🩺"),
    ("Testimonials", "testimonials", "💬"),
    ("Contact", "contact", "✉"),
];

fn logo() -> Html {
    html! {
        <div class="logo">
            <div class="logo-mark">
                <span>{"⚡"}</span>
                <span class="status-dot"></span>
            </div>
            <div>
                <span class="logo-title">{"AI Medicine"}</span>
                <div class="logo-subtitle">{"Smart Solutions"}</div>
            </div>
        </div>
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let modal = use_booking_modal();
    let scrolled = use_scrolled_past(SCROLLED_THRESHOLD_PX);
    let menu_open = use_state(|| false);

    let nav_button = |(label, id, icon): (&'static str, &'static str, &'static str), class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to_section(id);
            menu_open.set(false);
        });
        html! {
            <button key={id} {class} {onclick} aria-label={format!("Navigate to {} section", label)}>
                <span class="nav-icon" aria-hidden="true">{ icon }</span>
                <span>{ label }</span>
            </button>
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let get_started = {
        let modal = modal.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            modal.open();
        })
    };

    html! {
        <>
            <nav class={classes!("site-nav", scrolled.then_some("scrolled"))}>
                <div class="nav-inner">
                    { logo() }

                    <div class="nav-links">
                        { for NAV_ITEMS.into_iter().map(|item| nav_button(item, "nav-link")) }
                        <button class="btn btn-gradient btn-sm" onclick={get_started.clone()}
                            aria-label="Open consultation booking form">
                            {"Get Started"}
                        </button>
                    </div>

                    <button class="menu-toggle" onclick={toggle_menu}
                        aria-label={if *menu_open { "Close navigation menu" } else { "Open navigation menu" }}
                        aria-expanded={menu_open.to_string()}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-menu-backdrop" onclick={close_menu.clone()}></div>
                    <div class="mobile-menu-panel">
                        <div class="mobile-menu-header">
                            { logo() }
                            <button class="close-button" onclick={close_menu} aria-label="Close navigation menu">
                                {"✕"}
                            </button>
                        </div>
                        <div class="mobile-menu-items" role="navigation" aria-label="Mobile navigation menu">
                            { for NAV_ITEMS.into_iter().map(|item| nav_button(item, "mobile-nav-link")) }
                        </div>
                        <div class="mobile-menu-footer">
                            <button class="btn btn-gradient btn-lg full-width" onclick={get_started}
                                aria-label="Open consultation booking form">
                                {"Get Started"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
