use std::sync::Arc;

use crate::domain::ports::TextRecognizer;

// Shared application state for the HTTP handlers.
pub struct AppState {
    pub recognizer: Arc<dyn TextRecognizer>,
    pub max_body_bytes: usize,
}
