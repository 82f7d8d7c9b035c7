use yew::prelude::*;

struct DiagnosisStep {
    title: &'static str,
    description: &'static str,
}

const DOCTOR_STEPS: [DiagnosisStep; 4] = [
    DiagnosisStep { title: "Patient Assessment", description: "Examine symptoms and medical history" },
    DiagnosisStep { title: "Diagnosis", description: "Identify the root cause of the problem" },
    DiagnosisStep { title: "Treatment Plan", description: "Prescribe appropriate medication/solution" },
    DiagnosisStep { title: "Recovery Monitoring", description: "Track progress and adjust as needed" },
];

const AI_STEPS: [DiagnosisStep; 4] = [
    DiagnosisStep { title: "Data Analysis", description: "Process business metrics and performance data" },
    DiagnosisStep { title: "Bottleneck Detection", description: "Identify inefficiencies using AI algorithms" },
    DiagnosisStep { title: "AI Solution Design", description: "Create automated workflows and intelligent systems" },
    DiagnosisStep { title: "Performance Optimization", description: "Continuous monitoring and AI-driven improvements" },
];

fn diagnosis_column(icon: &str, heading: &str, variant: &'static str, steps: &[DiagnosisStep]) -> Html {
    html! {
        <div class={classes!("diagnosis-column", variant)}>
            <div class="column-heading">
                <span class="column-icon">{ icon }</span>
                <h3>{ heading }</h3>
            </div>
            <ol class="diagnosis-steps">
                { for steps.iter().enumerate().map(|(i, step)| html! {
                    <li key={step.title}>
                        <span class="step-number">{ i + 1 }</span>
                        <div>
                            <h4>{ step.title }</h4>
                            <p>{ step.description }</p>
                        </div>
                    </li>
                }) }
            </ol>
        </div>
    }
}

#[function_component(CaseAnalogySection)]
pub fn case_analogy_section() -> Html {
    html! {
        <section id="case-study" class="section case-study">
            <div class="container">
                <div class="section-header">
                    <h2>
                        {"From Medical Diagnosis to"}
                        <span class="gradient-text">{" AI Prescription"}</span>
                    </h2>
                    <p>
                        {"Just as doctors diagnose illnesses and prescribe treatments, we diagnose business \
                          inefficiencies and prescribe AI-powered solutions that drive transformation."}
                    </p>
                </div>

                <div class="analogy-split">
                    { diagnosis_column("🩺", "Traditional Medical Diagnosis", "doctor", &DOCTOR_STEPS) }
                    <div class="analogy-arrow" aria-hidden="true">{"→"}</div>
                    { diagnosis_column("⚡", "AI-Powered Business Diagnosis", "ai", &AI_STEPS) }
                </div>
            </div>
        </section>
    }
}
