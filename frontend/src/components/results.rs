use shared::{resolve_url, InferenceResult};
use yew::prelude::*;

use super::MaskGallery;
use crate::config;

/// What the result area displays, with every source already resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Image {
        annotated_src: String,
        masks: Vec<String>,
    },
    Video {
        src: String,
    },
}

impl ResultView {
    pub fn from_result(result: &InferenceResult, base_url: &str) -> Self {
        match result {
            InferenceResult::Image(image) => ResultView::Image {
                annotated_src: resolve_url(base_url, &image.annotated_image),
                masks: image.masks.clone(),
            },
            InferenceResult::Video(video) => ResultView::Video {
                src: resolve_url(base_url, &video.processed_video_url),
            },
        }
    }
}

pub fn render_results(result: Option<&InferenceResult>) -> Html {
    let Some(result) = result else {
        return html! {};
    };

    match ResultView::from_result(result, config::inference_base_url()) {
        ResultView::Image { annotated_src, masks } => html! {
            <div class="results-container image-results">
                <div class="result-card">
                    <h3>{"Annotated Output"}</h3>
                    <img class="annotated-image" src={annotated_src} alt="Annotated" />
                </div>
                <div class="result-card">
                    <h3>{"Segmented Masks"}</h3>
                    <MaskGallery {masks} />
                </div>
            </div>
        },
        ResultView::Video { src } => html! {
            <div class="results-container video-results">
                <h3>{"Processed Video Output"}</h3>
                <video class="processed-video" controls=true>
                    <source {src} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
            </div>
        },
    }
}
