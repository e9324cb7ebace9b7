use yew::prelude::*;

use crate::config::BANNER_PATH;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Why InfraScan?",
        body: "Timely pothole detection is crucial for traffic safety and infrastructure longevity. InfraScan helps in automating the monitoring process.",
    },
    Feature {
        title: "Smart & Scalable",
        body: "InfraScan supports image and video inputs, performs detection using robust Deep Learning models.",
    },
    Feature {
        title: "Supports Driver Safety",
        body: "Beyond inspections, InfraScan can help drivers avoid potholes by providing visual alerts, reducing accidents, and enabling safer journeys.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page home">
            <section class="hero">
                <h1>{"Advanced Civil Infrastructure Monitoring System"}</h1>
                <p class="lead">
                    {"InfraScan is a smart system for real-time pothole detection and road surface analysis. \
                      It helps road agencies detect and fix problems early, improving traffic safety and \
                      reducing repair costs for both authorities and drivers."}
                </p>
                <div class="banner">
                    <img src={BANNER_PATH} alt="InfraScan Road Detection" />
                </div>
            </section>

            <section class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <h2>{ feature.title }</h2>
                        <p>{ feature.body }</p>
                    </div>
                })}
            </section>
        </main>
    }
}
