use crate::domain::errors::OcrError;
use crate::interface_adapters::protocol::{OcrRequest, OcrResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ExtractTextUseCase;
use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

// Decode the image and run OCR on it. Pipeline failures are reported in the
// body; the status is always 200 once the request has been parsed.
pub async fn extract_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OcrRequest>,
) -> Json<OcrResponse> {
    let request_id = Uuid::new_v4();
    let span = tracing::debug_span!("extract_text", %request_id);
    let worker_span = span.clone();

    let use_case = ExtractTextUseCase {
        recognizer: state.recognizer.clone(),
    };

    // OCR is synchronous and CPU bound; keep it off the reactor threads.
    let outcome = tokio::task::spawn_blocking(move || {
        let _entered = worker_span.enter();
        debug!(payload_len = request.image_data.len(), "ocr request received");
        use_case.execute(&request.image_data)
    })
    .await
    .unwrap_or_else(|err| Err(OcrError::Recognition(format!("ocr task failed: {err}"))));

    span.in_scope(|| match &outcome {
        Ok(text) => debug!(text_len = text.len(), "text extracted"),
        Err(err) => warn!(error = %err, "ocr request failed"),
    });

    Json(OcrResponse::from(outcome))
}
