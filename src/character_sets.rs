/// What the recoder does with one character, whether it arrives literal or
/// percent-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit the character literally (decoding `%XX` if needed)
    Decode,
    /// Keep whichever form the input used
    Leave,
    /// Emit the character percent-encoded
    Encode,
}

/// Class of a printable ASCII byte with respect to RFC 3986
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Unreserved,
    GenDelim,
    SubDelim,
    /// Never valid literally: space, DEL, the backtick and `"<>\^{|}`
    Disallowed,
    Percent,
}

/// Classification of 0x20..=0x7F, indexed by `byte - 0x20`
const PRINTABLE_CLASS: [Class; 96] = {
    let mut table = [Class::Disallowed; 96];

    let mut i = b'a';
    while i <= b'z' {
        table[(i - 0x20) as usize] = Class::Unreserved;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[(i - 0x20) as usize] = Class::Unreserved;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[(i - 0x20) as usize] = Class::Unreserved;
        i += 1;
    }
    table[(b'-' - 0x20) as usize] = Class::Unreserved;
    table[(b'.' - 0x20) as usize] = Class::Unreserved;
    table[(b'_' - 0x20) as usize] = Class::Unreserved;
    table[(b'~' - 0x20) as usize] = Class::Unreserved;

    let gen_delims = b":/?#[]@";
    let mut i = 0;
    while i < gen_delims.len() {
        table[(gen_delims[i] - 0x20) as usize] = Class::GenDelim;
        i += 1;
    }

    let sub_delims = b"!$&'()*+,;=";
    let mut i = 0;
    while i < sub_delims.len() {
        table[(sub_delims[i] - 0x20) as usize] = Class::SubDelim;
        i += 1;
    }

    table[(b'%' - 0x20) as usize] = Class::Percent;
    table
};

fn class_of(b: u8) -> Option<Class> {
    (0x20..0x80)
        .contains(&b)
        .then(|| PRINTABLE_CLASS[(b - 0x20) as usize])
}

/// Build the default action table for printable ASCII.
///
/// Unreserved characters decode, delimiters are left alone (or decoded when
/// `decode_delimiters`), space is encoded unless `decode_spaces`, and the
/// disallowed characters are always encoded. `%` is handled by the recoder
/// itself and is marked `Leave`.
pub fn default_actions(decode_spaces: bool, decode_delimiters: bool) -> [Action; 96] {
    let mut actions = [Action::Encode; 96];
    for (slot, class) in actions.iter_mut().zip(PRINTABLE_CLASS.iter()) {
        *slot = match class {
            Class::Unreserved => Action::Decode,
            Class::GenDelim | Class::SubDelim if decode_delimiters => Action::Decode,
            Class::GenDelim | Class::SubDelim | Class::Percent => Action::Leave,
            Class::Disallowed => Action::Encode,
        };
    }
    if decode_spaces {
        actions[0] = Action::Decode;
    }
    actions
}

/// Check if a byte is in the RFC 3986 `unreserved` set
pub fn is_unreserved(b: u8) -> bool {
    class_of(b) == Some(Class::Unreserved)
}

/// Check if a byte is in the RFC 3986 `sub-delims` set
pub fn is_sub_delim(b: u8) -> bool {
    class_of(b) == Some(Class::SubDelim)
}

/// Check if a byte may appear at position `index` of a scheme
pub fn is_scheme_byte(b: u8, index: usize) -> bool {
    b.is_ascii_alphabetic()
        || (index > 0 && (b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')))
}

/// Characters accepted after the `v<hex>.` prefix of an IPvFuture literal
pub fn is_ipvfuture_byte(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// Characters a strict parse refuses to see literally: controls, space,
/// DEL, the backtick and `"<>\^{|}`
pub fn is_strict_forbidden(b: u8) -> bool {
    b <= 0x20 || b == 0x7F || class_of(b) == Some(Class::Disallowed)
}
