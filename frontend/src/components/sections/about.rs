use yew::prelude::*;

use crate::hooks::use_viewport::scroll_to_section;

const STATS: [(&str, &str); 2] = [("500+", "Projects Completed"), ("98%", "Client Satisfaction")];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container two-column">
                <div class="about-visual">
                    <div class="visual-card">{"👥"}</div>
                    <div class="floating-dot one"></div>
                    <div class="floating-dot two"></div>
                </div>

                <div class="about-text">
                    <h2>
                        {"Pioneering AI Solutions for"}
                        <span class="gradient-text">{" Modern Businesses"}</span>
                    </h2>
                    <p>
                        {"We're not just another AI agency. We're your strategic partner in the AI revolution, \
                          dedicated to transforming business inefficiencies into competitive advantages through \
                          intelligent automation and data-driven insights."}
                    </p>
                    <p>
                        {"With a multidisciplinary team of AI engineers, data scientists, and business strategists, \
                          we combine cutting-edge technology with deep industry expertise to deliver solutions that \
                          don't just work, they transform your business landscape."}
                    </p>

                    <div class="stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat" key={*label}>
                                <div class="stat-value">{ *value }</div>
                                <div class="stat-label">{ *label }</div>
                            </div>
                        }) }
                    </div>

                    <button class="btn btn-gradient btn-lg" onclick={|_: MouseEvent| scroll_to_section("solutions")}>
                        {"Learn More About Us"}
                    </button>
                </div>
            </div>
        </section>
    }
}
