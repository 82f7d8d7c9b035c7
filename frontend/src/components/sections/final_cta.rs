use chrono::Datelike;
use yew::prelude::*;

use crate::hooks::use_booking_modal::use_booking_modal;
use crate::hooks::use_viewport::{use_is_mobile, use_scrolled_past, viewport_height};

const BENEFITS: [(&str, &str); 3] = [
    ("300%", "Average Efficiency Increase"),
    ("24/7", "AI-Powered Operations"),
    ("ROI", "Guaranteed Results"),
];

#[function_component(FinalCtaSection)]
pub fn final_cta_section() -> Html {
    let modal = use_booking_modal();
    let is_mobile = use_is_mobile();
    // The sticky bar appears once the hero has scrolled out of view
    let hero_height = use_memo((), |_| viewport_height());
    let past_hero = use_scrolled_past(*hero_height);
    let year = chrono::Local::now().year();

    html! {
        <section id="contact" class="section final-cta">
            <div class="cta-glow one"></div>
            <div class="cta-glow two"></div>

            <div class="container narrow">
                <div class="sparkle">{"✨"}</div>
                <h2>
                    {"Transform Your Business with"}
                    <span class="gradient-text">{" NeuraCure"}</span>
                </h2>
                <p>
                    {"Stop treating symptoms. Cure the root cause of your business inefficiencies with our \
                      comprehensive AI diagnosis and treatment plan."}
                </p>

                <div class="benefits">
                    { for BENEFITS.iter().map(|(value, label)| html! {
                        <div class="benefit" key={*label}>
                            <div class="benefit-value">{ *value }</div>
                            <div class="benefit-label">{ *label }</div>
                        </div>
                    }) }
                </div>

                <button class="btn btn-gradient btn-xl" onclick={modal.open_callback::<MouseEvent>()}>
                    {"📅 Book Free Diagnosis Session →"}
                </button>

                <footer class="site-footer">
                    <span>{ format!("© {} NeuraCure. All rights reserved.", year) }</span>
                    <span class="muted">{"Powered by NeuraCure"}</span>
                </footer>
            </div>

            if is_mobile && past_hero {
                <div class="sticky-cta">
                    <div>
                        <div class="sticky-title">{"Book Free Diagnosis Session"}</div>
                        <div class="muted">{"Transform your business today"}</div>
                    </div>
                    <button class="btn btn-gradient btn-sm" onclick={modal.open_callback::<MouseEvent>()}>
                        {"Book Free Diagnosis"}
                    </button>
                </div>
            }
        </section>
    }
}
