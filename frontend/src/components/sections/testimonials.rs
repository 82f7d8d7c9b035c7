use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_booking_modal::use_booking_modal;

const AUTOPLAY_MS: u32 = 8_000;
const SWIPE_THRESHOLD_PX: i32 = 50;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: usize,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "CEO, TechFlow Solutions",
        company: "TechFlow Solutions",
        content: "The AI automation system they implemented increased our operational efficiency by 300%. What used to take our team 40 hours now takes just 8 hours. The ROI was evident within the first month.",
        rating: 5,
        avatar: "SC",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Operations Director, RetailMax",
        company: "RetailMax",
        content: "Their predictive analytics solution helped us optimize our inventory management, reducing stockouts by 75% and overstock by 60%. Our sales increased by 45% in the first quarter alone.",
        rating: 5,
        avatar: "MR",
    },
    Testimonial {
        name: "Emily Watson",
        role: "Marketing VP, GrowthCorp",
        company: "GrowthCorp",
        content: "The voice AI implementation transformed our customer service. Response times dropped from 24 hours to under 5 minutes, and customer satisfaction scores jumped from 3.2 to 4.8 out of 5.",
        rating: 5,
        avatar: "EW",
    },
    Testimonial {
        name: "David Kim",
        role: "CTO, InnovateLabs",
        company: "InnovateLabs",
        content: "Their custom AI solution for our R&D process accelerated our product development cycle by 200%. We've brought 3 new products to market in the time it used to take for one.",
        rating: 5,
        avatar: "DK",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

/// Carousel index after a horizontal swipe of `dx` pixels. Swiping right
/// goes back, swiping left goes forward, short drags change nothing.
pub fn index_after_swipe(current: usize, len: usize, dx: i32) -> usize {
    if dx > SWIPE_THRESHOLD_PX {
        prev_index(current, len)
    } else if dx < -SWIPE_THRESHOLD_PX {
        next_index(current, len)
    } else {
        current
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card">
            <div class="quote-mark">{"“"}</div>
            <div class="rating" aria-label={format!("{} out of 5 stars", testimonial.rating)}>
                { ("★".repeat(testimonial.rating)) }
            </div>
            <p class="testimonial-content">{ format!("“{}”", testimonial.content) }</p>
            <div class="author">
                <div class="avatar">{ testimonial.avatar }</div>
                <div>
                    <div class="author-name">{ testimonial.name }</div>
                    <div class="author-role">{ testimonial.role }</div>
                    <div class="author-company">{ testimonial.company }</div>
                </div>
            </div>
        </div>
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<i32> {
    e.changed_touches().get(0).map(|touch| touch.client_x())
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let modal = use_booking_modal();
    let current = use_state(|| 0usize);
    let touch_start = use_state(|| Option::<i32>::None);
    let len = TESTIMONIALS.len();

    // Restart the autoplay timer whenever the visitor moves the carousel
    {
        let current = current.clone();
        use_effect_with(*current, move |index| {
            let index = *index;
            let interval = Interval::new(AUTOPLAY_MS, move || current.set(next_index(index, len)));
            move || drop(interval)
        });
    }

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, len)))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };
    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| touch_start.set(first_touch_x(&e)))
    };
    let on_touch_end = {
        let current = current.clone();
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(start), Some(end)) = (*touch_start, first_touch_x(&e)) {
                current.set(index_after_swipe(*current, len, end - start));
            }
            touch_start.set(None);
        })
    };

    html! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <h2>
                        {"Success Stories from"}
                        <span class="gradient-text">{" AI Transformation"}</span>
                    </h2>
                    <p>
                        {"Don't just take our word for it. Hear from business leaders who've transformed their \
                          operations with our AI solutions."}
                    </p>
                </div>

                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|t| html! { <div key={t.name}>{ testimonial_card(t) }</div> }) }
                </div>

                <div class="testimonials-carousel">
                    <div class="carousel-viewport" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                        <div class="carousel-track" style={format!("transform: translateX(-{}%);", *current * 100)}>
                            { for TESTIMONIALS.iter().map(|t| html! {
                                <div class="carousel-slide" key={t.name}>{ testimonial_card(t) }</div>
                            }) }
                        </div>
                    </div>
                    <div class="carousel-controls">
                        <button class="nav-button" onclick={on_prev} aria-label="Previous testimonial">{"‹"}</button>
                        <div class="carousel-dots">
                            { for (0..len).map(|index| {
                                let onclick = {
                                    let current = current.clone();
                                    Callback::from(move |_: MouseEvent| current.set(index))
                                };
                                let class = classes!("dot", (*current == index).then_some("active"));
                                html! {
                                    <button key={index} {class} {onclick}
                                        aria-label={format!("Show testimonial {}", index + 1)}></button>
                                }
                            }) }
                        </div>
                        <button class="nav-button" onclick={on_next} aria-label="Next testimonial">{"›"}</button>
                    </div>
                    <p class="muted swipe-hint">{"Swipe or use arrows to navigate"}</p>
                </div>

                <div class="section-cta">
                    <span class="pill">{"Join 500+ satisfied clients"}</span>
                    <h3>{"Ready to Write Your Success Story?"}</h3>
                    <button class="btn btn-gradient btn-lg" onclick={modal.open_callback::<MouseEvent>()}>
                        {"Start Your AI Journey"}
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
    fn test_carousel_wraps_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(next_index(prev_index(2, 4), 4), 2);
    }

    #[test]
    fn test_swipe_needs_to_pass_threshold() {
        assert_eq!(index_after_swipe(1, 4, 30), 1);
        assert_eq!(index_after_swipe(1, 4, -50), 1);
        assert_eq!(index_after_swipe(1, 4, 80), 0);
        assert_eq!(index_after_swipe(1, 4, -80), 2);
    }
}
