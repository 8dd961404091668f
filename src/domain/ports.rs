use image::DynamicImage;

use crate::domain::errors::OcrError;

// Port for the OCR engine used by the extract-text use case.
pub trait TextRecognizer: Send + Sync {
    // Extract all text from an already decoded image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

impl<T> TextRecognizer for std::sync::Arc<T>
where
    T: TextRecognizer + ?Sized,
{
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        (**self).recognize(image)
    }
}
