use serde::{Deserialize, Serialize};

use crate::domain::errors::OcrError;

// Request payload for text extraction. `image_data` is raw base64 or a data URL.
#[derive(Debug, Deserialize)]
pub struct OcrRequest {
    pub image_data: String,
}

// Response payload: serialized as either `{"text": ...}` or `{"error": ...}`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OcrResponse {
    Text(String),
    Error(String),
}

impl From<Result<String, OcrError>> for OcrResponse {
    fn from(outcome: Result<String, OcrError>) -> Self {
        match outcome {
            Ok(text) => OcrResponse::Text(text),
            Err(err) => OcrResponse::Error(err.to_string()),
        }
    }
}
