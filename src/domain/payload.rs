use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};

use crate::domain::errors::OcrError;

// Standard alphabet, but tolerant of non-zero bits in the final symbol.
const PERMISSIVE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

// Drop an optional `data:<mime>;base64,` header. Only the text after the last
// comma is kept; a payload without a comma is returned unchanged.
pub fn strip_data_url_prefix(image_data: &str) -> &str {
    image_data.rsplit(',').next().unwrap_or(image_data)
}

// Lenient base64 decoding: characters outside the alphabet are skipped and
// everything after the first completed padding is ignored. A final group that
// is neither full nor padded is still an error.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, OcrError> {
    let canonical = canonicalize(payload)?;

    PERMISSIVE
        .decode(canonical)
        .map_err(|err| OcrError::InvalidBase64(err.to_string()))
}

fn canonicalize(payload: &str) -> Result<String, OcrError> {
    let mut canonical = String::with_capacity(payload.len());
    // Symbols in the current 4-symbol group, and padding seen after them.
    let mut group_len = 0usize;
    let mut pads = 0usize;

    for symbol in payload.chars() {
        match symbol {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => {
                canonical.push(symbol);
                group_len = (group_len + 1) % 4;
                pads = 0;
            }
            // Padding only counts once a group holds at least two symbols.
            '=' if group_len >= 2 => {
                pads += 1;
                if group_len + pads == 4 {
                    canonical.extend(std::iter::repeat_n('=', pads));
                    return Ok(canonical);
                }
            }
            _ => {}
        }
    }

    if group_len != 0 {
        return Err(OcrError::InvalidBase64("incorrect padding".to_string()));
    }

    Ok(canonical)
}
