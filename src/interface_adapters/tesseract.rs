use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use leptess::LepTess;

use crate::domain::errors::OcrError;
use crate::domain::ports::TextRecognizer;

// Tesseract-backed OCR engine. A fresh engine handle is created per call so no
// recognition state is shared between requests.
#[derive(Clone, Debug)]
pub struct TesseractRecognizer {
    tessdata_path: Option<String>,
    language: String,
}

impl TesseractRecognizer {
    pub fn new(tessdata_path: Option<String>, language: impl Into<String>) -> Self {
        Self {
            tessdata_path,
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let png = png_bytes(image)?;

        let mut engine = LepTess::new(self.tessdata_path.as_deref(), &self.language)
            .map_err(|err| OcrError::Recognition(format!("tesseract init: {err}")))?;

        engine
            .set_image_from_mem(&png)
            .map_err(|err| OcrError::Recognition(err.to_string()))?;

        engine
            .get_utf8_text()
            .map_err(|err| OcrError::Recognition(err.to_string()))
    }
}

// Leptonica reads encoded bytes, so hand the image over as a lossless PNG.
fn png_bytes(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
    // PNG has no float sample formats.
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(image.to_rgba8())
        }
        other => other.clone(),
    };

    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| OcrError::Recognition(err.to_string()))?;

    Ok(cursor.into_inner())
}
