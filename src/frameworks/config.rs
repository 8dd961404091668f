use std::{env, net::IpAddr};

// Runtime/server settings read from the environment.

pub fn http_host() -> IpAddr {
    env::var("OCR_SERVER_HOST")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(IpAddr::from([0, 0, 0, 0]))
}

pub fn http_port() -> u16 {
    env::var("OCR_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000)
}

// Tesseract's own default language.
pub fn ocr_language() -> String {
    env::var("OCR_LANGUAGE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "eng".to_string())
}

// `None` lets Tesseract fall back to TESSDATA_PREFIX and its compiled-in path.
pub fn tessdata_path() -> Option<String> {
    env::var("OCR_TESSDATA_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn max_body_bytes() -> usize {
    env::var("OCR_MAX_BODY_BYTES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_MAX_BODY_BYTES)
}

// Base64 inflates images by a third; 20 MiB leaves room for phone photos.
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
