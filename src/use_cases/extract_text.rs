use crate::domain::errors::OcrError;
use crate::domain::payload::{decode_base64, strip_data_url_prefix};
use crate::domain::ports::TextRecognizer;

// Decode-and-recognize use case with an injected OCR engine.
pub struct ExtractTextUseCase<R> {
    pub recognizer: R,
}

impl<R> ExtractTextUseCase<R>
where
    R: TextRecognizer,
{
    // Every failure along the pipeline ends up in the returned error; nothing
    // here panics on caller-supplied data.
    pub fn execute(&self, image_data: &str) -> Result<String, OcrError> {
        let payload = strip_data_url_prefix(image_data);
        let image_bytes = decode_base64(payload)?;

        let image = image::load_from_memory(&image_bytes)
            .map_err(|err| OcrError::UndecodableImage(err.to_string()))?;

        self.recognizer.recognize(&image)
    }
}
