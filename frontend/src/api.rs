use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{InferenceError, InferenceResult, MediaType, FILE_FIELD, MEDIA_TYPE_FIELD};
use web_sys::FormData;

use crate::config;

fn build_form(file: &GlooFile, media_type: MediaType) -> Result<FormData, InferenceError> {
    let form_data =
        FormData::new().map_err(|e| InferenceError::Request(format!("{:?}", e)))?;

    let raw: &web_sys::File = file.as_ref();
    form_data
        .append_with_blob_and_filename(FILE_FIELD, raw, &file.name())
        .map_err(|e| InferenceError::Request(format!("{:?}", e)))?;
    form_data
        .append_with_str(MEDIA_TYPE_FIELD, media_type.as_str())
        .map_err(|e| InferenceError::Request(format!("{:?}", e)))?;

    Ok(form_data)
}

/// Posts `file` to the prediction endpoint and decodes the reply as the
/// result shape for `media_type`.
pub async fn request_inference(
    file: &GlooFile,
    media_type: MediaType,
) -> Result<InferenceResult, InferenceError> {
    let form_data = build_form(file, media_type)?;
    let url = config::predict_url();

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| InferenceError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| InferenceError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| InferenceError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(InferenceError::from_status(status, &body));
    }

    InferenceResult::decode(media_type, &body)
}
