use crate::error::ErrorCode;

/// Check if a host name is shaped like a dotted IPv4 address: two or more
/// labels, all ASCII digits. A trailing dot is ignored.
pub fn is_dotted_numeric(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);
    input.contains('.')
        && input
            .split('.')
            .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse the text after a port delimiter.
/// Digits are accumulated with overflow detection, so arbitrarily long
/// inputs are rejected without wrapping.
pub fn parse_port(port: &str) -> Result<u16, ErrorCode> {
    if port.is_empty() {
        return Err(ErrorCode::PortEmpty);
    }
    let mut value: u16 = 0;
    for b in port.bytes() {
        if !b.is_ascii_digit() {
            return Err(ErrorCode::InvalidPort);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u16::from(b - b'0')))
            .ok_or(ErrorCode::InvalidPort)?;
    }
    Ok(value)
}

/// Check if there is a Windows drive letter (`C:`) at `pos`,
/// followed by a separator or the end of input.
pub fn is_windows_drive_letter(bytes: &[u8], pos: usize) -> bool {
    pos + 1 < bytes.len()
        && bytes[pos].is_ascii_alphabetic()
        && bytes[pos + 1] == b':'
        && (pos + 2 == bytes.len() || matches!(bytes[pos + 2], b'/' | b'\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dotted_numeric() {
        assert!(is_dotted_numeric("192.168.1.1"));
        assert!(is_dotted_numeric("256.1.1.1"));
        assert!(is_dotted_numeric("1.2.3"));
        assert!(is_dotted_numeric("1.2.3."));
        assert!(!is_dotted_numeric("123"));
        assert!(!is_dotted_numeric("example.123"));
        assert!(!is_dotted_numeric("host.1"));
        assert!(!is_dotted_numeric("1..2"));
        assert!(!is_dotted_numeric(""));
        assert!(!is_dotted_numeric("."));
        assert!(!is_dotted_numeric("example.com"));
        assert!(!is_dotted_numeric("0x7f.1"));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Ok(80));
        assert_eq!(parse_port("0"), Ok(0));
        assert_eq!(parse_port("65535"), Ok(65535));
        assert_eq!(parse_port("0008080"), Ok(8080));
        assert_eq!(parse_port("65536"), Err(ErrorCode::InvalidPort));
        assert_eq!(parse_port("99999999999999999999"), Err(ErrorCode::InvalidPort));
        assert_eq!(parse_port("8a"), Err(ErrorCode::InvalidPort));
        assert_eq!(parse_port("-1"), Err(ErrorCode::InvalidPort));
        assert_eq!(parse_port(""), Err(ErrorCode::PortEmpty));
    }

    #[test]
    fn test_windows_drive_letter() {
        assert!(is_windows_drive_letter(b"C:", 0));
        assert!(is_windows_drive_letter(b"C:/Windows", 0));
        assert!(is_windows_drive_letter(b"/c:/x", 1));
        assert!(!is_windows_drive_letter(b"C|/x", 0));
        assert!(is_windows_drive_letter(b"d:\\x", 0));
        assert!(!is_windows_drive_letter(b"C:x", 0));
        assert!(!is_windows_drive_letter(b"1:/", 0));
        assert!(!is_windows_drive_letter(b"C", 0));
    }
}
