pub mod about;
pub mod case_analogy;
pub mod demo_voice_agent;
pub mod final_cta;
pub mod hero;
pub mod solutions_grid;
pub mod testimonials;

pub use about::AboutSection;
pub use case_analogy::CaseAnalogySection;
pub use demo_voice_agent::DemoVoiceAgent;
pub use final_cta::FinalCtaSection;
pub use hero::HeroSection;
pub use solutions_grid::SolutionsGrid;
pub use testimonials::TestimonialsSection;
