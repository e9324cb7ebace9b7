use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{FlowError, InferenceError, InferenceResult, MediaType, Outcome, Submission, SubmissionId};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::request_inference;
use crate::config;
use crate::pages::upload::{Msg, Upload};

const INFERENCE_FAILED: &str = "Error during inference";

pub fn handle_select_media_type(upload: &mut Upload, media_type: MediaType) -> bool {
    if let Some(submission) = upload.flow.pending() {
        log::warn!(
            "Media type changed while submission {} is in flight; its result will be discarded",
            submission.id
        );
    }

    upload.flow.select_media_type(media_type);

    // The picker keeps showing the old file name unless it is reset.
    if let Some(input) = upload.file_input.cast::<HtmlInputElement>() {
        input.set_value("");
    }

    true
}

pub fn handle_file_chosen(upload: &mut Upload, file: GlooFile) -> bool {
    log::info!("Selected {} ({} bytes)", file.name(), file.size());

    let preview_url = ObjectUrl::from(file.clone());
    upload.flow.select_file(file, preview_url);
    true
}

pub fn handle_submit(upload: &mut Upload, ctx: &Context<Upload>) -> bool {
    match upload.flow.submit() {
        Ok((submission, file)) => {
            log::info!(
                "Submitting {} as {} to {} (submission {})",
                file.name(),
                submission.media_type,
                config::predict_url(),
                submission.id
            );
            send_inference_request(ctx, Rc::clone(&upload.alive), submission, file);
            true
        }
        Err(FlowError::NoFileSelected) => {
            gloo_dialogs::alert(&FlowError::NoFileSelected.to_string());
            false
        }
        Err(e @ FlowError::AlreadyInFlight) => {
            log::warn!("{}", e);
            false
        }
    }
}

pub fn handle_inference_completed(
    upload: &mut Upload,
    id: SubmissionId,
    response: Result<InferenceResult, InferenceError>,
) -> bool {
    match upload.flow.complete(id, response) {
        Outcome::Applied => {
            log::info!("Submission {} completed", id);
            true
        }
        Outcome::Failed(e) => {
            log::error!("Submission {} failed: {}", id, e);
            gloo_dialogs::alert(INFERENCE_FAILED);
            true
        }
        Outcome::Discarded => {
            log::warn!("Discarded result of submission {}: selection changed", id);
            true
        }
        Outcome::Unmatched => {
            log::warn!("Ignoring response for unknown submission {}", id);
            false
        }
    }
}

pub fn send_inference_request(
    ctx: &Context<Upload>,
    alive: Rc<Cell<bool>>,
    submission: Submission,
    file: GlooFile,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let response = request_inference(&file, submission.media_type).await;

            if !alive.get() {
                log::info!("Upload view is gone; dropping response of submission {}", submission.id);
                return;
            }

            link.send_message(Msg::InferenceCompleted(submission.id, response));
        }
    });
}
