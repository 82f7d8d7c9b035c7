use yew::prelude::*;

use crate::components::booking::ConsultationBooking;
use crate::components::navigation::Navigation;
use crate::components::sections::{
    AboutSection, CaseAnalogySection, DemoVoiceAgent, FinalCtaSection, HeroSection, SolutionsGrid,
    TestimonialsSection,
};
use crate::hooks::use_booking_modal::BookingModalProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BookingModalProvider>
            <div class="page">
                <Navigation />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <SolutionsGrid />
                    <DemoVoiceAgent />
                    <CaseAnalogySection />
                    <TestimonialsSection />
                    <FinalCtaSection />
                </main>
                <ConsultationBooking />
            </div>
        </BookingModalProvider>
    }
}
