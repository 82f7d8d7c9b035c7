use yew::prelude::*;

use crate::hooks::use_viewport::{scroll_to_section, use_is_mobile};
use crate::services::decoration::{particles, PARTICLE_SEED};

const PARTICLE_COUNT: usize = 25;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let is_mobile = use_is_mobile();
    let particles = use_memo((), |_| particles(PARTICLE_SEED, PARTICLE_COUNT));

    let background = if is_mobile {
        html! { <div class="hero-gradient mobile"></div> }
    } else {
        html! {
            <>
                <div class="hero-gradient waves"></div>
                { for particles.iter().enumerate().map(|(i, p)| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        p.left, p.top, p.duration, p.delay
                    );
                    html! { <div key={i} class="particle" {style}></div> }
                }) }
            </>
        }
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-background">{ background }</div>

            <div class="hero-content">
                <h1>
                    <span>{"NeuraCure:"}</span>
                    <span>{" AI-Powered Solutions"}</span>
                </h1>
                <h2>{"For Every Inefficiency, There's an AI Solution"}</h2>
                <p>
                    {"Transform your business bottlenecks into competitive advantages with our cutting-edge AI \
                      solutions. Just like medicine diagnoses and treats diseases, we diagnose inefficiencies \
                      and prescribe AI treatments."}
                </p>
            </div>

            <button class="scroll-indicator" onclick={|_: MouseEvent| scroll_to_section("about")}>
                <span>{"Scroll to explore"}</span>
                <span class="scroll-mouse"><span class="scroll-dot"></span></span>
            </button>
        </section>
    }
}
