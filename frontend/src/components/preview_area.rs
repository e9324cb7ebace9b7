use shared::MediaType;
use yew::prelude::*;

use crate::pages::upload::Upload;

pub fn render_preview_area(upload: &Upload) -> Html {
    let Some(url) = upload.flow.preview() else {
        return html! {};
    };
    let src = url.to_string();

    html! {
        <div id="preview-container">
            <h3>{"Preview"}</h3>
            {
                match upload.flow.media_type() {
                    MediaType::Image => html! {
                        <img id="actual-image-preview" {src} alt="Preview" />
                    },
                    MediaType::Video => html! {
                        <video id="actual-video-preview" controls=true {src} />
                    },
                }
            }
        </div>
    }
}
