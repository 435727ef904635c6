/// IPv6 address parsing and canonical serialization (RFC 4291 text forms)
use crate::compat::{String, Vec};
use crate::ipv4::parse_ipv4;
use core::fmt::Write;

/// Parse an IPv6 address without brackets (e.g., "`::1`" or "`2001:db8::1`").
/// Returns the 8 u16 segments if valid.
pub fn parse_ipv6(input: &str) -> Option<[u16; 8]> {
    // Check for embedded IPv4 (e.g., "::127.0.0.1")
    let has_embedded_ipv4 = input
        .rfind(':')
        .is_some_and(|pos| input[pos + 1..].contains('.'));

    if has_embedded_ipv4 {
        parse_ipv6_with_ipv4(input)
    } else {
        parse_groups(input, 8)
    }
}

/// Parse `want` hextets, with at most one `::` standing for one or more zeros.
fn parse_groups(input: &str, want: usize) -> Option<[u16; 8]> {
    let mut segments = [0u16; 8];

    let Some(double_colon_pos) = input.find("::") else {
        let parsed = parse_segments(input)?;
        if parsed.len() != want {
            return None;
        }
        segments[..want].copy_from_slice(&parsed);
        return Some(segments);
    };

    let before = &input[..double_colon_pos];
    let after = &input[double_colon_pos + 2..];
    if after.contains("::") {
        return None;
    }
    let before_segments = parse_segments(before)?;
    let after_segments = parse_segments(after)?;

    let total = before_segments.len() + after_segments.len();
    if total >= want {
        return None;
    }

    segments[..before_segments.len()].copy_from_slice(&before_segments);
    let after_start = want - after_segments.len();
    segments[after_start..want].copy_from_slice(&after_segments);

    Some(segments)
}

/// Parse IPv6 with embedded IPv4 (e.g., "`::127.0.0.1`" or "`::ffff:192.168.1.1`").
fn parse_ipv6_with_ipv4(input: &str) -> Option<[u16; 8]> {
    let last_colon = input.rfind(':')?;
    let ipv4_addr = parse_ipv4(&input[last_colon + 1..])?;

    // Keep the colon when it is the second half of a "::"
    let ipv6_part = if input[..last_colon].ends_with(':') {
        &input[..=last_colon]
    } else {
        &input[..last_colon]
    };

    let mut segments = parse_groups(ipv6_part, 6)?;
    segments[6] = (ipv4_addr >> 16) as u16;
    segments[7] = (ipv4_addr & 0xFFFF) as u16;
    Some(segments)
}

/// Parse a single hex segment (0-ffff).
fn parse_hex_segment(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}

/// Parse colon-separated hex segments from a string.
fn parse_segments(s: &str) -> Option<Vec<u16>> {
    if s.is_empty() {
        return Some(Vec::new());
    }
    s.split(':').map(parse_hex_segment).collect()
}

/// Serialize IPv6 segments to bracketed text with compression.
///
/// Lowercase hex, the longest run of two or more zero groups (leftmost on
/// ties) becomes `::`, and v4-mapped addresses keep their dotted tail.
pub fn serialize_ipv6(segments: &[u16; 8]) -> String {
    let mut result = String::with_capacity(41);
    result.push('[');

    if segments[..5].iter().all(|&s| s == 0) && segments[5] == 0xFFFF {
        let _ = write!(
            &mut result,
            "::ffff:{}.{}.{}.{}]",
            segments[6] >> 8,
            segments[6] & 0xFF,
            segments[7] >> 8,
            segments[7] & 0xFF
        );
        return result;
    }

    let (compress_start, compress_len) = find_longest_zero_sequence(segments);

    // Only compress sequences of 2+ zeros
    let compress_range = compress_start
        .filter(|_| compress_len > 1)
        .map(|start| start..start + compress_len);

    let mut i = 0;
    while i < 8 {
        if let Some(ref range) = compress_range
            && range.start == i
        {
            result.push_str("::");
            i = range.end;
            continue;
        }

        if i > 0 && !result.ends_with("::") {
            result.push(':');
        }

        let _ = write!(&mut result, "{:x}", segments[i]);
        i += 1;
    }

    result.push(']');
    result
}

/// Find the longest sequence of consecutive zeros in IPv6 segments.
fn find_longest_zero_sequence(segments: &[u16; 8]) -> (Option<usize>, usize) {
    let mut best_start: Option<usize> = None;
    let mut best_len = 0;
    let mut current_start: Option<usize> = None;
    let mut current_len = 0;

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current_start.is_none() {
                current_start = Some(i);
                current_len = 1;
            } else {
                current_len += 1;
            }
            if current_len > best_len {
                best_start = current_start;
                best_len = current_len;
            }
        } else {
            current_start = None;
            current_len = 0;
        }
    }

    (best_start, best_len)
}
