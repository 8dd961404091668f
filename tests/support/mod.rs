// Shared primitives for one-time server bootstrapping across integration tests.
use std::{
    io::Cursor,
    sync::{Arc, OnceLock},
    time::Duration,
};

use image::{DynamicImage, ImageFormat, RgbImage};
use ocr_server::domain::errors::OcrError;
use ocr_server::domain::ports::TextRecognizer;
use ocr_server::interface_adapters::state::AppState;

// Text every successful request returns, so tests can tell the engine ran.
pub const STUB_TEXT: &str = "stub text\n";

// Engine stand-in so the suite runs without a Tesseract install.
struct StubRecognizer;

impl TextRecognizer for StubRecognizer {
    fn recognize(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        Ok(STUB_TEXT.to_string())
    }
}

// Global base URL used by all tests after the server publishes its bound address.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the server bootstrap path runs only once.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    // Concurrent callers block here until the first bootstrap finishes.
    SERVER_READY.get_or_init(|| {
        // Slot the server thread fills once the OS has picked a port.
        let published_url = Arc::new(OnceLock::<String>::new());
        // Second handle moved into the server thread.
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            // Dedicated runtime, independent of the per-test runtimes.
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            // Serve until the test binary exits.
            runtime.block_on(async move {
                // Bind to an ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                // Port 0 means the real port is only known after binding.
                let addr = listener.local_addr().expect("get local addr");
                // Hand the base URL back to the waiting test thread.
                let _ = published_url_thread.set(format!("http://{}", addr));

                // Stub engine keeps every response deterministic.
                let recognizer: Arc<dyn TextRecognizer> = Arc::new(StubRecognizer);
                let state = Arc::new(AppState {
                    recognizer,
                    max_body_bytes: 1024 * 1024,
                });
                ocr_server::run(listener, state).await.expect("server failed");
            });
        });
        // Do not return until requests can actually be served.
        wait_for_server_url_and_readiness(published_url);
    });

    // Same URL for every test in this binary.
    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Block until the server thread has published its URL and accepts TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    // Spin on the published slot; binding is quick but happens on another thread.
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        // Short nap so the loop does not burn a core.
        std::thread::sleep(Duration::from_millis(10));
    };

    // Make the URL visible to `ensure_server` callers.
    let _ = SERVER_URL.set(base_url.clone());

    // Raw TCP probes need host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        // A completed connect means axum is accepting.
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        // Back off briefly between attempts.
        std::thread::sleep(Duration::from_millis(20));
    }

    // Two seconds without an accepting socket means startup failed.
    panic!("server did not become ready in time");
}

// Base64 of a 1x1 white PNG.
pub fn blank_png_base64() -> String {
    use base64::{Engine, engine::general_purpose};

    let image = RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]));
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("png encoding");
    general_purpose::STANDARD.encode(cursor.into_inner())
}
