use shared::{resolve_url, PREDICT_PATH};

const DEFAULT_INFERENCE_BASE_URL: &str = "http://localhost:8000";

/// Banner shown on the Home page.
pub const BANNER_PATH: &str = "/banner.png";

/// Base URL of the inference service, fixed at build time through the
/// `INFERENCE_BASE_URL` environment variable.
pub fn inference_base_url() -> &'static str {
    option_env!("INFERENCE_BASE_URL").unwrap_or(DEFAULT_INFERENCE_BASE_URL)
}

pub fn predict_url() -> String {
    resolve_url(inference_base_url(), PREDICT_PATH)
}
