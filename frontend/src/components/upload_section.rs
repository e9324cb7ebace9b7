use shared::{MediaType, UploadFlow};
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::utils::first_file;
use crate::pages::upload::{Msg, Upload};

pub fn render_upload_section(upload: &Upload, ctx: &Context<Upload>) -> Html {
    html! {
        <div class="upload-section">
            { render_media_selector(upload, ctx) }
            { render_file_input_area(upload, ctx) }
        </div>
    }
}

fn render_media_selector(upload: &Upload, ctx: &Context<Upload>) -> Html {
    let selected = upload.flow.media_type();

    html! {
        <div class="media-type-selector">
            { for MediaType::iter().map(|media_type| html! {
                <label>
                    <input
                        type="radio"
                        name="media_type"
                        value={media_type.as_str()}
                        checked={selected == media_type}
                        onchange={ctx.link().callback(move |_| Msg::SelectMediaType(media_type))}
                    />
                    <span class="radio-label-text">{ media_type.label() }</span>
                </label>
            })}
        </div>
    }
}

/// The submit control is off while a request is outstanding.
pub fn submit_disabled<F, P>(flow: &UploadFlow<F, P>) -> bool {
    flow.is_in_flight()
}

fn render_file_input_area(upload: &Upload, ctx: &Context<Upload>) -> Html {
    let link = ctx.link();
    let in_flight = submit_disabled(&upload.flow);

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.files().as_ref().and_then(first_file).map(Msg::FileChosen)
    });

    html! {
        <div class="file-input-area">
            <input
                type="file"
                id="file-input"
                ref={upload.file_input.clone()}
                accept={upload.flow.media_type().accept()}
                onchange={handle_change}
            />

            <button
                id="submit-button"
                class="analyze-btn"
                type="button"
                onclick={upload.submit.clone()}
                disabled={in_flight}
            >
                { if in_flight {
                    html! { <><span class="spinner-inline"></span>{" Analyzing..."}</> }
                } else {
                    html! { {"Upload & Predict"} }
                }}
            </button>
        </div>
    }
}
