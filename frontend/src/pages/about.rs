use yew::prelude::*;

const HIGHLIGHTS: [&str; 5] = [
    "Real-time road condition monitoring from images or videos",
    "Supports both object detection and semantic segmentation",
    "Helps municipalities prioritize repair tasks proactively",
    "Alerts drivers about potholes to avoid damage",
    "Fast, scalable solution powered by deep learning",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="page about">
            <h1>{"About InfraScan"}</h1>

            <section>
                <h2>{"The Problem"}</h2>
                <p>
                    {"Potholes are a significant hazard to road users, causing accidents, vehicle damage, \
                      and economic losses. Traditional inspection methods are manual, time-consuming, and \
                      often miss emerging road issues. Delayed detection increases maintenance costs and \
                      risks for both governments and drivers."}
                </p>
            </section>

            <section>
                <h2>{"Our Solution"}</h2>
                <p>
                    {"InfraScan provides an intelligent road monitoring system that detects potholes and \
                      surface damage in real-time. By analyzing images and videos, it assists transportation \
                      agencies in prioritizing road repairs and also provides warnings to drivers to avoid \
                      potholes, reducing accidents and improving public safety."}
                </p>
            </section>

            <section>
                <h2>{"System Highlights"}</h2>
                <ul>
                    { for HIGHLIGHTS.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </section>

            <section>
                <h2>{"Model Architecture & Technology"}</h2>
                <p>
                    {"InfraScan is built using state-of-the-art deep learning architectures. For more precise \
                      damage localization and detection, we employ a U-Net++ segmentation model with an \
                      EfficientNet-b3 encoder, trained on labeled pothole datasets. The system leverages \
                      PyTorch and OpenCV for model inference and image processing, with seamless backend \
                      integration via FastAPI."}
                </p>
            </section>
        </main>
    }
}
