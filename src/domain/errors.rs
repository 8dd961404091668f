use thiserror::Error;

// Domain-level errors for the decode-and-recognize pipeline.
// The Display output is what callers see under the `error` key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OcrError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    #[error("cannot identify image: {0}")]
    UndecodableImage(String),
    #[error("ocr failed: {0}")]
    Recognition(String),
}
