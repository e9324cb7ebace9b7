//! Types shared by the InfraScan frontend and anything else that talks to the
//! pothole inference endpoint.

pub mod flow;
pub mod inference;
pub mod media;

pub use flow::{FlowError, Outcome, Phase, Submission, SubmissionId, UploadFlow};
pub use inference::{
    mask_data_uri, resolve_url, ImageInference, InferenceError, InferenceResult, VideoInference,
    FILE_FIELD, MEDIA_TYPE_FIELD, PREDICT_PATH,
};
pub use media::MediaType;
