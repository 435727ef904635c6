use crate::compat::String;
use crate::error::{ErrorCode, Result, UrlError};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// First character that makes a name unusable as a host, for error messages
fn offending_char(domain: &str) -> Option<char> {
    domain
        .chars()
        .find(|c| c.is_ascii() && !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')))
}

fn invalid_name(domain: &str) -> UrlError {
    UrlError::new(ErrorCode::InvalidRegName, offending_char(domain))
}

/// Process a domain using the IDNA `ToASCII` algorithm.
///
/// The result is the ASCII-compatible encoding: case-folded, mapped and
/// Punycode-encoded where needed.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    // Pure ASCII LDH names without Punycode only need lowercasing
    if domain.is_ascii() && !has_punycode(domain) {
        let mut result = String::with_capacity(domain.len());
        let mut simple = true;
        for b in domain.bytes() {
            match b {
                b'A'..=b'Z' => result.push(b.to_ascii_lowercase() as char),
                b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' => result.push(b as char),
                _ => {
                    simple = false;
                    break;
                }
            }
        }
        if simple {
            return Ok(result);
        }
    }

    idna::domain_to_ascii(domain).map_err(|_| invalid_name(domain))
}

/// Normalize a registered name into its canonical Unicode form.
///
/// Runs `ToASCII` (case folding, compatibility mapping, validation) and
/// then decodes any Punycode labels back to Unicode, so that equivalent
/// spellings collapse to one stored value.
pub fn normalize_domain(domain: &str) -> Result<String> {
    let ascii = domain_to_ascii(domain)?;
    if ascii.is_empty() {
        return Err(invalid_name(domain));
    }
    if !has_punycode(&ascii) {
        return Ok(ascii);
    }
    let (unicode, outcome) = idna::domain_to_unicode(&ascii);
    outcome.map_err(|_| invalid_name(domain))?;
    Ok(unicode)
}

/// Convert a domain from its ASCII-compatible encoding to Unicode.
///
/// Returns an empty string when the domain is not a valid name.
pub fn from_ace(domain: &str) -> String {
    normalize_domain(domain).unwrap_or_default()
}

/// Convert a domain to its ASCII-compatible encoding.
///
/// # Errors
///
/// Returns `InvalidRegName` when the domain cannot be encoded.
pub fn to_ace(domain: &str) -> Result<String> {
    let ascii = domain_to_ascii(domain)?;
    if ascii.is_empty() && !domain.is_empty() {
        return Err(invalid_name(domain));
    }
    Ok(ascii)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_to_ascii() {
        assert_eq!(domain_to_ascii("Example.COM").unwrap(), "example.com");

        let result = domain_to_ascii("日本.jp");
        assert!(result.is_ok());
        assert!(result.unwrap().starts_with("xn--"));
    }

    #[test]
    fn test_normalize_domain_returns_unicode() {
        assert_eq!(normalize_domain("xn--wgv71a.jp").unwrap(), "日本.jp");
        assert_eq!(normalize_domain("BÜCHER.de").unwrap(), "bücher.de");
        assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_folds_fullwidth_digits() {
        assert_eq!(normalize_domain("１２７.０.０.１").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_invalid_names() {
        let err = normalize_domain("exa mple.com").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRegName);
        assert_eq!(err.supplement(), Some(' '));
        assert!(normalize_domain("").is_err());
    }

    #[test]
    fn test_ace_round_trip() {
        assert_eq!(to_ace("bücher.de").unwrap(), "xn--bcher-kva.de");
        assert_eq!(from_ace("xn--bcher-kva.de"), "bücher.de");
        assert_eq!(from_ace("exa mple"), "");
    }

    #[test]
    fn test_has_punycode() {
        assert!(has_punycode("xn--bcher-kva.de"));
        assert!(has_punycode("www.XN--bcher-kva.de"));
        assert!(!has_punycode("example.com"));
    }
}
