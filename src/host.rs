//! Host classification: IP literals, dotted-quad IPv4 and registered names.
//!
//! Every accepted host is stored in exactly one canonical form: a bracketed
//! IPv6 / IPvFuture literal, a dotted-quad IPv4 address, or a normalized
//! Unicode registered name.

use crate::character_sets::is_ipvfuture_byte;
use crate::checkers::is_dotted_numeric;
use crate::compat::{Cow, String, ToString};
use crate::error::{ErrorCode, UrlError};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::types::ComponentFormattingOptions;
use crate::unicode::idna::normalize_domain;
use crate::unicode::percent_encode::recode;

fn fail(code: ErrorCode, supplement: Option<char>) -> Result<String, UrlError> {
    Err(UrlError::new(code, supplement))
}

fn percent_decoded(input: &str) -> Option<String> {
    match recode(input, ComponentFormattingOptions::FULLY_DECODED, &[]) {
        Cow::Owned(decoded) if decoded != input => Some(decoded),
        _ => None,
    }
}

/// Classify and normalize a host. The empty host is valid.
pub fn parse_host(input: &str) -> Result<String, UrlError> {
    if input.is_empty() {
        return Ok(String::new());
    }
    if input.starts_with('[') {
        return parse_ip_literal(input);
    }
    if let Some(address) = parse_ipv4(input) {
        return Ok(serialize_ipv4(address));
    }
    parse_reg_name(input)
}

/// `[` IPv6address / IPvFuture `]`, brackets included in `input`
fn parse_ip_literal(input: &str) -> Result<String, UrlError> {
    let Some(inner) = input.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        return fail(ErrorCode::HostMissingEndBracket, None);
    };

    if input.len() > 5 && inner.starts_with('v') {
        return parse_ipvfuture(input, inner);
    }

    // one percent-decoding retry for literals like "[::%31]"
    let mut candidate = Cow::Borrowed(inner);
    for _ in 0..2 {
        if let Some(segments) = parse_ipv6(&candidate) {
            return Ok(serialize_ipv6(&segments));
        }
        match percent_decoded(&candidate) {
            Some(decoded) => candidate = Cow::Owned(decoded),
            None => break,
        }
    }

    let code = if inner.starts_with('v') {
        ErrorCode::InvalidIPvFuture
    } else {
        ErrorCode::InvalidIPv6Address
    };
    fail(code, None)
}

/// `"v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`, stored unchanged
fn parse_ipvfuture(input: &str, inner: &str) -> Result<String, UrlError> {
    let version = &inner[1..];
    let Some(dot) = version.find('.') else {
        return fail(ErrorCode::InvalidIPvFuture, version.chars().find(|c| !c.is_ascii_hexdigit()));
    };
    if dot == 0 || !version[..dot].bytes().all(|b| b.is_ascii_hexdigit()) {
        let offending = version.chars().find(|c| !c.is_ascii_hexdigit());
        return fail(ErrorCode::InvalidIPvFuture, offending);
    }

    let address = &version[dot + 1..];
    if address.is_empty() {
        return fail(ErrorCode::InvalidIPvFuture, Some(']'));
    }
    if let Some(bad) = address.chars().find(|&c| !c.is_ascii() || !is_ipvfuture_byte(c as u8)) {
        return fail(ErrorCode::InvalidIPvFuture, Some(bad));
    }
    Ok(input.to_string())
}

/// Registered name: at most one percent-decoding pass, then IDN
/// normalization, then the IPv4 re-check for names that folded to digits.
fn parse_reg_name(input: &str) -> Result<String, UrlError> {
    let mut candidate = Cow::Borrowed(input);

    if candidate.contains('%') {
        let Some(decoded) = percent_decoded(&candidate) else {
            return fail(ErrorCode::InvalidRegName, Some('%'));
        };
        if decoded.contains('%') {
            return fail(ErrorCode::InvalidRegName, Some('%'));
        }
        // a decoded name may turn out to be one of the literal forms
        if decoded.starts_with('[') {
            return parse_ip_literal(&decoded);
        }
        if let Some(address) = parse_ipv4(&decoded) {
            return Ok(serialize_ipv4(address));
        }
        candidate = Cow::Owned(decoded);
    }

    let normalized = normalize_domain(&candidate)?;
    if let Some(address) = parse_ipv4(&normalized) {
        return Ok(serialize_ipv4(address));
    }
    if is_dotted_numeric(&normalized) {
        return fail(ErrorCode::InvalidIPv4Address, None);
    }
    Ok(normalized)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn code(input: &str) -> ErrorCode {
        parse_host(input).unwrap_err().code()
    }

    #[test]
    fn test_ipv6_literals() {
        assert_eq!(parse_host("[::1]").unwrap(), "[::1]");
        assert_eq!(parse_host("[2001:DB8:0:0:0:0:0:1]").unwrap(), "[2001:db8::1]");
        assert_eq!(parse_host("[::%31]").unwrap(), "[::1]");
        assert_eq!(code("[::1"), ErrorCode::HostMissingEndBracket);
        assert_eq!(code("[1:2]"), ErrorCode::InvalidIPv6Address);
        assert_eq!(code("[::%2531]"), ErrorCode::InvalidIPv6Address);
    }

    #[test]
    fn test_ipvfuture_literals() {
        assert_eq!(parse_host("[v7.a:b!$]").unwrap(), "[v7.a:b!$]");
        assert_eq!(parse_host("[vF.Host]").unwrap(), "[vF.Host]");

        let err = parse_host("[v7.a b]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidIPvFuture);
        assert_eq!(err.supplement(), Some(' '));

        assert_eq!(code("[vz.abc]"), ErrorCode::InvalidIPvFuture);
        assert_eq!(code("[v1]"), ErrorCode::InvalidIPvFuture);
    }

    #[test]
    fn test_ipv4() {
        assert_eq!(parse_host("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(parse_host("%31%32%37.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(parse_host("１２７.０.０.１").unwrap(), "127.0.0.1");
        assert_eq!(code("256.1.1.1"), ErrorCode::InvalidIPv4Address);
        assert_eq!(code("1.2.3"), ErrorCode::InvalidIPv4Address);
    }

    #[test]
    fn test_reg_names() {
        assert_eq!(parse_host("EXAMPLE.com").unwrap(), "example.com");
        assert_eq!(parse_host("xn--bcher-kva.de").unwrap(), "bücher.de");
        assert_eq!(parse_host("ex%41mple.org").unwrap(), "example.org");
        assert_eq!(parse_host("").unwrap(), "");

        let err = parse_host("bad host").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRegName);
        assert_eq!(err.supplement(), Some(' '));

        assert_eq!(code("ex%2541mple"), ErrorCode::InvalidRegName);
    }

    #[test]
    fn test_numeric_labels_in_names() {
        assert_eq!(parse_host("123").unwrap(), "123");
        assert_eq!(parse_host("host.1").unwrap(), "host.1");
        assert_eq!(parse_host("example.123").unwrap(), "example.123");
        assert_eq!(code("1.2.3."), ErrorCode::InvalidIPv4Address);
    }
}
