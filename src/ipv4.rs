/// Strict dotted-quad IPv4 parsing: exactly four decimal octets, 0-255
use crate::compat::{String, format};

/// Parse an IPv4 address string into a u32.
/// Only the `d.d.d.d` form is accepted; each part is 1-3 decimal digits.
pub fn parse_ipv4(input: &str) -> Option<u32> {
    let mut address: u32 = 0;
    let mut parts = 0;

    for part in input.split('.') {
        parts += 1;
        if parts > 4 || part.is_empty() || part.len() > 3 {
            return None;
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let octet: u8 = part.parse().ok()?;
        address = (address << 8) | u32::from(octet);
    }

    (parts == 4).then_some(address)
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}
