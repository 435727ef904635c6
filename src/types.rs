/// How much repair the parser is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParsingMode {
    /// Percent-encode stray spaces, lone `%` and disallowed delimiters
    #[default]
    Tolerant,
    /// Same parse, but anything tolerant mode would repair is an error
    Strict,
}

/// Bit set of URL components, used for both presence and error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sections(u8);

impl Sections {
    pub const NONE: Self = Self(0);
    pub const SCHEME: Self = Self(0x01);
    pub const USER_NAME: Self = Self(0x02);
    pub const PASSWORD: Self = Self(0x04);
    pub const USER_INFO: Self = Self(0x02 | 0x04);
    pub const HOST: Self = Self(0x08);
    pub const PORT: Self = Self(0x10);
    pub const AUTHORITY: Self = Self(0x02 | 0x04 | 0x08 | 0x10);
    pub const PATH: Self = Self(0x20);
    pub const QUERY: Self = Self(0x40);
    pub const FRAGMENT: Self = Self(0x80);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when any bit of `other` is set
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub(crate) fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub(crate) fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub(crate) fn set(&mut self, other: Self, on: bool) {
        if on {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl core::ops::BitOr for Sections {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitAnd for Sections {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// How much a component is decoded when it is read back out.
///
/// The delimiter bits form three tiers: fully encoded (neither bit),
/// unambiguous delimiters decoded, and all delimiters decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentFormattingOptions(u8);

/// Delimiter decoding tier selected by a [`ComponentFormattingOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelimiterTier {
    Encoded,
    Unambiguous,
    All,
}

impl ComponentFormattingOptions {
    pub const FULLY_ENCODED: Self = Self(0);
    pub const DECODE_SPACES: Self = Self(0x01);
    pub const DECODE_UNICODE: Self = Self(0x02);
    pub const DECODE_UNAMBIGUOUS_DELIMITERS: Self = Self(0x04);
    pub const DECODE_ALL_DELIMITERS: Self = Self(0x04 | 0x08);
    /// Spaces, Unicode and unambiguous delimiters decoded; the stored form
    pub const PRETTY_DECODED: Self = Self(0x01 | 0x02 | 0x04);
    pub const MOST_DECODED: Self = Self(0x01 | 0x02 | 0x04 | 0x08);
    /// Every `%XX` sequence decoded; the output cannot be parsed back
    pub const FULLY_DECODED: Self = Self(0x01 | 0x02 | 0x04 | 0x08 | 0x10);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub(crate) fn tier(self) -> DelimiterTier {
        if self.contains(Self::DECODE_ALL_DELIMITERS) {
            DelimiterTier::All
        } else if self.contains(Self::DECODE_UNAMBIGUOUS_DELIMITERS) {
            DelimiterTier::Unambiguous
        } else {
            DelimiterTier::Encoded
        }
    }
}

impl Default for ComponentFormattingOptions {
    fn default() -> Self {
        Self::PRETTY_DECODED
    }
}

impl core::ops::BitOr for ComponentFormattingOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_sections() {
        assert!(Sections::AUTHORITY.contains(Sections::USER_INFO));
        assert!(Sections::AUTHORITY.contains(Sections::PORT));
        assert!(!Sections::AUTHORITY.intersects(Sections::PATH));
    }

    #[test]
    fn test_insert_remove() {
        let mut bits = Sections::NONE;
        bits.insert(Sections::QUERY);
        bits.set(Sections::FRAGMENT, true);
        assert!(bits.contains(Sections::QUERY | Sections::FRAGMENT));
        bits.remove(Sections::QUERY);
        assert_eq!(bits, Sections::FRAGMENT);
        bits.set(Sections::FRAGMENT, false);
        assert!(bits.is_empty());
    }

    #[test]
    fn test_delimiter_tiers() {
        type O = ComponentFormattingOptions;
        assert_eq!(O::FULLY_ENCODED.tier(), DelimiterTier::Encoded);
        assert_eq!(O::PRETTY_DECODED.tier(), DelimiterTier::Unambiguous);
        assert_eq!(O::MOST_DECODED.tier(), DelimiterTier::All);
        assert_eq!(O::FULLY_DECODED.tier(), DelimiterTier::All);
        assert_eq!(
            (O::DECODE_SPACES | O::DECODE_UNICODE).tier(),
            DelimiterTier::Encoded
        );
        assert!(O::PRETTY_DECODED.contains(O::DECODE_UNICODE));
        assert!(!O::PRETTY_DECODED.without(O::DECODE_UNICODE).contains(O::DECODE_UNICODE));
    }
}
