use crate::character_sets::is_scheme_byte;
use crate::compat::{Cow, String};
use crate::error::{ErrorCode, UrlError};
use crate::types::ComponentFormattingOptions;
use crate::unicode::percent_encode::recode;

pub const FTP: &str = "ftp";
pub const HTTP: &str = "http";
pub const FILE: &str = "file";

/// Validate a scheme candidate and return its lowercase form.
///
/// A `%` triggers exactly one percent-decoding pass; a `%` seen again after
/// that pass is an error.
pub fn normalize_scheme(candidate: &str) -> Result<String, UrlError> {
    let mut current = Cow::Borrowed(candidate);
    let mut decoded_once = false;

    loop {
        if current.is_empty() {
            return Err(UrlError::new(ErrorCode::SchemeEmpty, None));
        }
        let Some(pos) = current
            .bytes()
            .enumerate()
            .position(|(i, b)| !is_scheme_byte(b, i))
        else {
            return Ok(current.to_ascii_lowercase());
        };

        let bad = current[pos..].chars().next();
        if bad != Some('%') || decoded_once {
            return Err(UrlError::new(ErrorCode::InvalidScheme, bad));
        }
        let decoded = recode(&current, ComponentFormattingOptions::FULLY_DECODED, &[]).into_owned();
        current = Cow::Owned(decoded);
        decoded_once = true;
    }
}
