// Framework bootstrap for the OCR server runtime.

use crate::domain::ports::TextRecognizer;
use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::tesseract::TesseractRecognizer;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the OCR routes on an already bound listener.
pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, build_state()).await
}

fn build_state() -> Arc<AppState> {
    let tessdata_path = config::tessdata_path();
    let recognizer = TesseractRecognizer::new(tessdata_path.clone(), config::ocr_language());
    let max_body_bytes = config::max_body_bytes();
    tracing::debug!(
        language = recognizer.language(),
        tessdata_path = tessdata_path.as_deref().unwrap_or("<default>"),
        max_body_bytes,
        "ocr engine configured"
    );

    let recognizer: Arc<dyn TextRecognizer> = Arc::new(recognizer);
    Arc::new(AppState {
        recognizer,
        max_body_bytes,
    })
}
