use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::MediaType;

/// Path of the prediction route on the inference service.
pub const PREDICT_PATH: &str = "/predict/";
/// Multipart field carrying the raw file bytes.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the media type selector.
pub const MEDIA_TYPE_FIELD: &str = "media_type";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInference {
    /// Server relative path of the annotated image.
    pub annotated_image: String,
    /// Base64 encoded PNG masks, in detection order.
    #[serde(default)]
    pub masks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInference {
    /// Server relative path of the processed MP4.
    pub processed_video_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decoded response of the inference service, tagged with the media type
/// it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    Image(ImageInference),
    Video(VideoInference),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl InferenceResult {
    /// Decodes a response body using the shape expected for `media_type`.
    pub fn decode(media_type: MediaType, body: &str) -> Result<Self, InferenceError> {
        let decoded = match media_type {
            MediaType::Image => serde_json::from_str(body).map(InferenceResult::Image),
            MediaType::Video => serde_json::from_str(body).map(InferenceResult::Video),
        };
        decoded.map_err(|e| InferenceError::Decode(e.to_string()))
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            InferenceResult::Image(_) => MediaType::Image,
            InferenceResult::Video(_) => MediaType::Video,
        }
    }
}

impl InferenceError {
    /// Builds the error for a non-success status. Uses the service's
    /// `{"error": ...}` message when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => body.trim().to_string(),
        };
        InferenceError::Server { status, message }
    }
}

/// Joins a server relative path onto the service base URL. Absolute URLs
/// are returned unchanged.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

pub fn mask_data_uri(mask: &str) -> String {
    format!("data:image/png;base64,{}", mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_image_response() {
        let body = r#"{"annotated_image": "/out/1.png", "masks": ["aGVsbG8=", "d29ybGQ="]}"#;
        let result = InferenceResult::decode(MediaType::Image, body).unwrap();

        assert_eq!(result.media_type(), MediaType::Image);
        match result {
            InferenceResult::Image(image) => {
                assert_eq!(image.annotated_image, "/out/1.png");
                assert_eq!(image.masks, vec!["aGVsbG8=", "d29ybGQ="]);
            }
            other => panic!("expected image result, got {:?}", other),
        }
    }

    #[test]
    fn missing_masks_decode_as_empty() {
        let body = r#"{"annotated_image": "/outputs/a.jpg"}"#;
        let result = InferenceResult::decode(MediaType::Image, body).unwrap();
        assert_eq!(
            result,
            InferenceResult::Image(ImageInference {
                annotated_image: "/outputs/a.jpg".into(),
                masks: Vec::new(),
            })
        );
    }

    #[test]
    fn decodes_video_response() {
        let body = r#"{"processed_video_url": "/out/1.mp4"}"#;
        let result = InferenceResult::decode(MediaType::Video, body).unwrap();
        assert_eq!(
            result,
            InferenceResult::Video(VideoInference {
                processed_video_url: "/out/1.mp4".into(),
            })
        );
    }

    #[test]
    fn shape_is_chosen_by_media_type() {
        let video_body = r#"{"processed_video_url": "/out/1.mp4"}"#;
        let err = InferenceResult::decode(MediaType::Image, video_body).unwrap_err();
        assert!(matches!(err, InferenceError::Decode(_)));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = InferenceResult::decode(MediaType::Video, "<html>oops</html>").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn server_error_prefers_error_field() {
        let err = InferenceError::from_status(500, r#"{"error": "Processed AVI video not found."}"#);
        assert_eq!(
            err,
            InferenceError::Server {
                status: 500,
                message: "Processed AVI video not found.".into(),
            }
        );
        assert_eq!(err.to_string(), "Server error: 500 - Processed AVI video not found.");
    }

    #[test]
    fn server_error_falls_back_to_raw_body() {
        let err = InferenceError::from_status(502, "  Bad Gateway\n");
        assert_eq!(
            err,
            InferenceError::Server {
                status: 502,
                message: "Bad Gateway".into(),
            }
        );
    }

    #[test]
    fn resolves_paths_against_base() {
        assert_eq!(
            resolve_url("http://localhost:8000", "/outputs/a.jpg"),
            "http://localhost:8000/outputs/a.jpg"
        );
        assert_eq!(
            resolve_url("http://localhost:8000/", "outputs/a.jpg"),
            "http://localhost:8000/outputs/a.jpg"
        );
        assert_eq!(
            resolve_url("http://localhost:8000", "https://cdn.example.com/v.mp4"),
            "https://cdn.example.com/v.mp4"
        );
    }

    #[test]
    fn mask_uri_is_inline_png() {
        assert_eq!(mask_data_uri("aGVsbG8="), "data:image/png;base64,aGVsbG8=");
    }
}
