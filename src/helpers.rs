use crate::character_sets::is_strict_forbidden;

/// Positions of the delimiters that split a URI reference.
///
/// `colon` and `question` are only recorded before the first `#`, and
/// `colon` only before the first `?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delimiters {
    pub colon: Option<usize>,
    pub question: Option<usize>,
    pub hash: Option<usize>,
}

impl Delimiters {
    /// End of the hier-part: the first `?` or `#`, or the input length
    pub fn hier_end(&self, len: usize) -> usize {
        self.question.or(self.hash).unwrap_or(len)
    }
}

/// Find the top-level delimiters.
/// Optimization: three SIMD-accelerated memchr passes over shrinking prefixes
pub fn find_delimiters(input: &str) -> Delimiters {
    let bytes = input.as_bytes();
    let hash = memchr::memchr(b'#', bytes);
    let before_hash = &bytes[..hash.unwrap_or(bytes.len())];
    let question = memchr::memchr(b'?', before_hash);
    let before_query = &before_hash[..question.unwrap_or(before_hash.len())];
    let colon = memchr::memchr(b':', before_query);

    Delimiters {
        colon,
        question,
        hash,
    }
}

/// Find the first character a strict parse refuses: a `%` not followed by
/// two hex digits, a control character or space, DEL, a backtick, or one
/// of `"<>\^{|}`. Non-ASCII text is not checked.
pub fn find_strict_violation(input: &str) -> Option<(usize, char)> {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        let bad_percent = b == b'%'
            && !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
            );
        (b < 0x80 && (bad_percent || is_strict_forbidden(b))).then_some((i, b as char))
    })
}
