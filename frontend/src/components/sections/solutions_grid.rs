use yew::prelude::*;

use crate::hooks::use_viewport::{scroll_to_section, use_is_mobile};

pub struct Solution {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SOLUTIONS: [Solution; 4] = [
    Solution {
        id: 1,
        title: "Intelligent Automation",
        icon: "🤖",
        description: "Streamline repetitive tasks with AI-powered workflows that learn and adapt to your business processes.",
        features: ["Process optimization", "Smart scheduling", "Error reduction", "24/7 operation"],
    },
    Solution {
        id: 2,
        title: "Predictive Analytics",
        icon: "📊",
        description: "Harness the power of data to forecast trends, identify opportunities, and make data-driven decisions.",
        features: ["Revenue forecasting", "Customer behavior analysis", "Risk assessment", "Performance metrics"],
    },
    Solution {
        id: 3,
        title: "Voice Intelligence",
        icon: "🎤",
        description: "Transform voice interactions with advanced speech recognition, natural language processing, and conversational AI.",
        features: ["Voice assistants", "Call analytics", "Transcription services", "Multi-language support"],
    },
    Solution {
        id: 4,
        title: "Custom AI Solutions",
        icon: "⚡",
        description: "Tailored AI implementations designed specifically for your unique business challenges and objectives.",
        features: ["Bespoke models", "API integrations", "Scalable architecture", "Ongoing optimization"],
    },
];

/// Accordion rule: tapping the open card closes it, tapping another card
/// opens that one instead
pub fn toggle_expanded(current: Option<u32>, tapped: u32) -> Option<u32> {
    if current == Some(tapped) {
        None
    } else {
        Some(tapped)
    }
}

fn feature_list(solution: &Solution) -> Html {
    html! {
        <ul class="feature-list">
            { for solution.features.iter().map(|feature| html! { <li key={*feature}>{ *feature }</li> }) }
        </ul>
    }
}

#[function_component(SolutionsGrid)]
pub fn solutions_grid() -> Html {
    let is_mobile = use_is_mobile();
    let expanded = use_state(|| Option::<u32>::None);

    let cards = if is_mobile {
        html! {
            <div class="solutions-accordion">
                { for SOLUTIONS.iter().map(|solution| {
                    let is_open = *expanded == Some(solution.id);
                    let onclick = {
                        let expanded = expanded.clone();
                        let id = solution.id;
                        Callback::from(move |_: MouseEvent| expanded.set(toggle_expanded(*expanded, id)))
                    };
                    html! {
                        <div class={classes!("accordion-card", is_open.then_some("open"))} key={solution.id}>
                            <button class="accordion-header" {onclick} aria-expanded={is_open.to_string()}>
                                <span class="solution-icon">{ solution.icon }</span>
                                <h3>{ solution.title }</h3>
                                <span class="chevron">{ if is_open { "▴" } else { "▾" } }</span>
                            </button>
                            if is_open {
                                <div class="accordion-body">
                                    <p>{ solution.description }</p>
                                    { feature_list(solution) }
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        }
    } else {
        html! {
            <div class="solutions-grid">
                { for SOLUTIONS.iter().map(|solution| html! {
                    <div class="solution-card" key={solution.id}>
                        <div class="solution-heading">
                            <span class="solution-icon">{ solution.icon }</span>
                            <h3>{ solution.title }</h3>
                        </div>
                        <p>{ solution.description }</p>
                        { feature_list(solution) }
                        <span class="learn-more">{"Learn More →"}</span>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section id="solutions" class="section solutions">
            <div class="container">
                <div class="section-header">
                    <h2>
                        {"AI Solutions for Every"}
                        <span class="gradient-text">{" Business Need"}</span>
                    </h2>
                    <p>
                        {"From automation to predictive insights, our comprehensive suite of AI solutions addresses \
                          the most common business inefficiencies with precision and scale."}
                    </p>
                </div>

                { cards }

                <div class="section-cta">
                    <button class="btn btn-gradient btn-lg" onclick={|_: MouseEvent| scroll_to_section("demo")}>
                        {"Explore All Solutions"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_keeps_one_card_open() {
        let opened = toggle_expanded(None, 2);
        assert_eq!(opened, Some(2));
        assert_eq!(toggle_expanded(opened, 3), Some(3));
        assert_eq!(toggle_expanded(opened, 2), None);
    }

    #[test]
    fn test_solution_ids_are_unique() {
        let mut ids: Vec<u32> = SOLUTIONS.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), SOLUTIONS.len());
    }
}
