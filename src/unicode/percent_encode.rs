use crate::character_sets::{Action, default_actions, is_unreserved};
use crate::compat::{Cow, String};
use crate::types::{ComponentFormattingOptions, DelimiterTier};
use percent_encoding::percent_decode;

/// A table modification: force one printable ASCII character to an action
pub type ActionOverride = (u8, Action);

use Action::{Decode, Encode, Leave};

// Ambiguous delimiters per component, from last to first:
//  - fragment: none, it is the last component
//  - query: `#` starts the fragment; everything else is caller-defined and
//    never transformed
//  - path: `#` and `?`, and `/` is structural
//  - password: `#`, `?`, `/`, `@`
//  - user name: the password set plus `:`

const USER_NAME_ENCODED: &[ActionOverride] = &[
    (b':', Encode),
    (b'[', Encode),
    (b']', Encode),
    (b'@', Encode),
    (b'/', Encode),
    (b'?', Encode),
    (b'#', Encode),
];

const PASSWORD_ENCODED: &[ActionOverride] = &[
    (b':', Decode),
    (b'[', Encode),
    (b']', Encode),
    (b'@', Encode),
    (b'/', Encode),
    (b'?', Encode),
    (b'#', Encode),
];

const PATH_ENCODED: &[ActionOverride] = &[
    (b'[', Encode),
    (b']', Encode),
    (b'?', Encode),
    (b'#', Encode),
    (b'/', Leave),
    (b':', Decode),
    (b'@', Decode),
];
const PATH_PRETTY: &[ActionOverride] = &[
    (b'?', Encode),
    (b'#', Encode),
    (b'/', Leave),
    (b':', Decode),
    (b'@', Decode),
];
const PATH_DECODED: &[ActionOverride] = &[(b'/', Leave), (b':', Decode), (b'@', Decode)];

const FRAGMENT_ENCODED: &[ActionOverride] = &[
    (b'#', Decode),
    (b':', Decode),
    (b'@', Decode),
    (b'/', Decode),
    (b'?', Decode),
    (b'[', Encode),
    (b']', Encode),
];

const QUERY_ENCODED: &[ActionOverride] = &[(b'#', Encode), (b'[', Encode), (b']', Encode)];

/// Applied when a query is stored: the disallowed characters are kept
/// literal so the caller's own encoding scheme survives. `[` and `]` are
/// stored encoded, matching what a re-parse of the encoded form stores.
const QUERY_STORED: &[ActionOverride] = &[
    (b'"', Decode),
    (b'<', Decode),
    (b'>', Decode),
    (b'\\', Decode),
    (b'^', Decode),
    (b'`', Decode),
    (b'{', Decode),
    (b'|', Decode),
    (b'}', Decode),
    (b'#', Encode),
    (b'[', Encode),
    (b']', Encode),
];

/// The components that go through the table-driven recoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    UserName,
    Password,
    Path,
    Query,
    Fragment,
}

impl Component {
    /// The override table for a delimiter tier.
    ///
    /// The query has no tables of its own above the encoded tier; see
    /// [`recode_component`].
    pub fn actions(self, tier: DelimiterTier) -> &'static [ActionOverride] {
        match (self, tier) {
            (Self::UserName, DelimiterTier::Encoded | DelimiterTier::Unambiguous) => {
                USER_NAME_ENCODED
            }
            (Self::Password, DelimiterTier::Encoded | DelimiterTier::Unambiguous) => {
                PASSWORD_ENCODED
            }
            (Self::Path, DelimiterTier::Encoded) => PATH_ENCODED,
            (Self::Path, DelimiterTier::Unambiguous) => PATH_PRETTY,
            (Self::Path, DelimiterTier::All) => PATH_DECODED,
            (Self::Fragment, DelimiterTier::Encoded) => FRAGMENT_ENCODED,
            (Self::Query, DelimiterTier::Encoded) => QUERY_ENCODED,
            _ => &[],
        }
    }
}

/// Check for a `%` that is not followed by two hex digits
fn has_bad_percent(bytes: &[u8]) -> bool {
    memchr::memchr_iter(b'%', bytes).any(|pos| {
        !matches!(
            (bytes.get(pos + 1), bytes.get(pos + 2)),
            (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
        )
    })
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

fn push_encoded(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(HEX[usize::from(byte >> 4)] as char);
    out.push(HEX[usize::from(byte & 0xF)] as char);
}

/// Decode a run of `%XX` triplets forming one UTF-8 character.
/// Returns the character and the number of input bytes consumed.
fn decode_utf8_triplets(bytes: &[u8]) -> Option<(char, usize)> {
    let mut buf = [0u8; 4];
    let lead = triplet(bytes, 0)?;
    let len = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    buf[0] = lead;
    for (k, slot) in buf.iter_mut().enumerate().take(len).skip(1) {
        *slot = triplet(bytes, k * 3)?;
    }
    let s = core::str::from_utf8(&buf[..len]).ok()?;
    s.chars().next().map(|c| (c, len * 3))
}

fn triplet(bytes: &[u8], at: usize) -> Option<u8> {
    match bytes.get(at..at + 3)? {
        [b'%', h, l] if h.is_ascii_hexdigit() && l.is_ascii_hexdigit() => {
            Some(hex_value(*h) << 4 | hex_value(*l))
        }
        _ => None,
    }
}

/// Re-encode `input` according to `options`, with `overrides` patched over
/// the default action table.
///
/// Characters outside printable ASCII are controlled by the options alone:
/// controls are always encoded, non-ASCII is kept literal (and `%XX` UTF-8
/// runs decoded) only with `DECODE_UNICODE`. A `%` not followed by two hex
/// digits makes the whole input be treated as unencoded, so every `%`
/// becomes `%25`. Encoded triplets that are kept are normalized to
/// uppercase hex.
pub fn recode<'a>(
    input: &'a str,
    options: ComponentFormattingOptions,
    overrides: &[ActionOverride],
) -> Cow<'a, str> {
    if options.contains(ComponentFormattingOptions::FULLY_DECODED) {
        return percent_decode(input.as_bytes()).decode_utf8_lossy();
    }

    let mut actions = default_actions(
        options.contains(ComponentFormattingOptions::DECODE_SPACES),
        options.contains(ComponentFormattingOptions::DECODE_ALL_DELIMITERS),
    );
    for &(byte, action) in overrides {
        if let Some(slot) = byte.checked_sub(0x20).and_then(|i| actions.get_mut(usize::from(i))) {
            *slot = action;
        }
    }
    let decode_unicode = options.contains(ComponentFormattingOptions::DECODE_UNICODE);

    let bytes = input.as_bytes();
    let repair_percent = has_bad_percent(bytes);
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'%' {
            if repair_percent {
                out.push_str("%25");
                i += 1;
                continue;
            }
            let decoded = triplet(bytes, i).unwrap_or(b'%');
            if decoded >= 0x80 {
                if decode_unicode
                    && let Some((ch, used)) = decode_utf8_triplets(&bytes[i..])
                {
                    out.push(ch);
                    i += used;
                    continue;
                }
            } else if decoded >= 0x20 && actions[usize::from(decoded - 0x20)] == Decode {
                out.push(decoded as char);
                i += 3;
                continue;
            }
            push_encoded(&mut out, decoded);
            i += 3;
            continue;
        }

        if b < 0x20 {
            push_encoded(&mut out, b);
            i += 1;
            continue;
        }

        if b < 0x80 {
            if actions[usize::from(b - 0x20)] == Encode {
                push_encoded(&mut out, b);
            } else {
                out.push(b as char);
            }
            i += 1;
            continue;
        }

        let Some(ch) = input[i..].chars().next() else {
            break;
        };
        if decode_unicode {
            out.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                push_encoded(&mut out, byte);
            }
        }
        i += ch.len_utf8();
    }

    if out == input {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(out)
    }
}

/// Recode user-supplied text into the stored pretty form of `component`
pub fn recode_from_user(input: &str, component: Component) -> Cow<'_, str> {
    type O = ComponentFormattingOptions;
    match component {
        Component::Query => recode(input, O::DECODE_SPACES | O::DECODE_UNICODE, QUERY_STORED),
        _ => recode(
            input,
            O::DECODE_SPACES | O::DECODE_UNICODE | O::DECODE_ALL_DELIMITERS,
            component.actions(DelimiterTier::Unambiguous),
        ),
    }
}

/// Recode a stored (pretty) component for output
pub fn recode_component(
    value: &str,
    component: Component,
    options: ComponentFormattingOptions,
) -> Cow<'_, str> {
    type O = ComponentFormattingOptions;
    if options == O::PRETTY_DECODED {
        return Cow::Borrowed(value);
    }
    let tier = options.tier();
    match (component, tier) {
        (_, _) if options.contains(O::FULLY_DECODED) => recode(value, options, &[]),
        // delimiters inside a query are left as the caller wrote them
        (Component::Query, DelimiterTier::Unambiguous) => {
            recode(value, options.without(O::DECODE_ALL_DELIMITERS), &[])
        }
        _ => recode(value, options, component.actions(tier)),
    }
}

/// Decode every `%XX` sequence, then interpret the bytes as UTF-8
/// (invalid sequences become U+FFFD).
pub fn from_percent_encoding(input: &[u8]) -> String {
    percent_decode(input).decode_utf8_lossy().into_owned()
}

/// Percent-encode the UTF-8 form of `input`.
///
/// Unreserved characters are kept; every other byte is encoded. Bytes in
/// `exclude` are kept literal, bytes in `include` are always encoded;
/// `exclude` wins when a byte is in both.
pub fn to_percent_encoding(input: &str, exclude: &[u8], include: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        if exclude.contains(&b) || (is_unreserved(b) && !include.contains(&b)) {
            out.push(b as char);
        } else {
            push_encoded(&mut out, b);
        }
    }
    out
}
