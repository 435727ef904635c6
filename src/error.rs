use crate::types::Sections;

/// The closed set of reasons a component can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A scheme delimiter was present but nothing preceded it
    SchemeEmpty,
    /// Scheme contains a character outside `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    InvalidScheme,
    /// User name contains a disallowed character
    InvalidUserName,
    /// Password contains a disallowed character
    InvalidPassword,
    /// Registered name failed IDN normalization or is double-encoded
    InvalidRegName,
    /// Host looks like an IPv4 address but is not a valid dotted quad
    InvalidIPv4Address,
    /// Bracketed literal is not a valid IPv6 address
    InvalidIPv6Address,
    /// Bracketed `v`-literal does not follow the IPvFuture grammar
    InvalidIPvFuture,
    /// Host starts with `[` but does not end with `]`
    HostMissingEndBracket,
    /// Port delimiter present with no digits after it
    PortEmpty,
    /// Port contains a non-digit or exceeds 65535
    InvalidPort,
    /// Path contains a disallowed character
    InvalidPath,
    /// Query contains a disallowed character
    InvalidQuery,
    /// Fragment contains a disallowed character
    InvalidFragment,
}

impl ErrorCode {
    /// The component this error is recorded against.
    pub fn section(self) -> Sections {
        match self {
            Self::SchemeEmpty | Self::InvalidScheme => Sections::SCHEME,
            Self::InvalidUserName => Sections::USER_NAME,
            Self::InvalidPassword => Sections::PASSWORD,
            Self::InvalidRegName
            | Self::InvalidIPv4Address
            | Self::InvalidIPv6Address
            | Self::InvalidIPvFuture
            | Self::HostMissingEndBracket => Sections::HOST,
            Self::PortEmpty | Self::InvalidPort => Sections::PORT,
            Self::InvalidPath => Sections::PATH,
            Self::InvalidQuery => Sections::QUERY,
            Self::InvalidFragment => Sections::FRAGMENT,
        }
    }

    /// The code reported for a component whose specific code was overwritten.
    pub(crate) fn generic_for(section: Sections) -> Option<Self> {
        [
            (Sections::SCHEME, Self::InvalidScheme),
            (Sections::USER_NAME, Self::InvalidUserName),
            (Sections::PASSWORD, Self::InvalidPassword),
            (Sections::HOST, Self::InvalidRegName),
            (Sections::PORT, Self::InvalidPort),
            (Sections::PATH, Self::InvalidPath),
            (Sections::QUERY, Self::InvalidQuery),
            (Sections::FRAGMENT, Self::InvalidFragment),
        ]
        .into_iter()
        .find(|(bit, _)| section.intersects(*bit))
        .map(|(_, code)| code)
    }
}

/// A component error: the code plus the offending character, if any.
///
/// The message is only rendered when the value is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlError {
    code: ErrorCode,
    supplement: Option<char>,
}

impl UrlError {
    pub(crate) fn new(code: ErrorCode, supplement: Option<char>) -> Self {
        Self { code, supplement }
    }

    /// The error code
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The character that triggered the error, when one is known
    pub fn supplement(&self) -> Option<char> {
        self.supplement
    }

    /// The component the error belongs to
    pub fn section(&self) -> Sections {
        self.code.section()
    }
}

impl core::fmt::Display for UrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let with_char = |f: &mut core::fmt::Formatter<'_>, what: &str| match self.supplement {
            Some(c) => write!(f, "Invalid {what} (character '{c}' not permitted)"),
            None => write!(f, "Invalid {what}"),
        };
        match self.code {
            ErrorCode::SchemeEmpty => f.write_str("Empty scheme"),
            ErrorCode::InvalidScheme => with_char(f, "scheme"),
            ErrorCode::InvalidUserName => with_char(f, "user name"),
            ErrorCode::InvalidPassword => with_char(f, "password"),
            ErrorCode::InvalidRegName => match self.supplement {
                Some(_) => with_char(f, "hostname"),
                None => f.write_str("Hostname contains invalid characters"),
            },
            ErrorCode::InvalidIPv4Address => f.write_str("Invalid IPv4 address"),
            ErrorCode::InvalidIPv6Address => f.write_str("Invalid IPv6 address"),
            ErrorCode::InvalidIPvFuture => f.write_str("Invalid IPvFuture address"),
            ErrorCode::HostMissingEndBracket => {
                f.write_str("Expected ']' to match '[' in hostname")
            }
            ErrorCode::PortEmpty | ErrorCode::InvalidPort => {
                f.write_str("Invalid port or port number out of range")
            }
            ErrorCode::InvalidPath => with_char(f, "path"),
            ErrorCode::InvalidQuery => with_char(f, "query"),
            ErrorCode::InvalidFragment => with_char(f, "fragment"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

/// Result type for the fallible conveniences around URL parsing
pub type Result<T> = core::result::Result<T, UrlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_message_includes_offending_character() {
        let err = UrlError::new(ErrorCode::InvalidScheme, Some('%'));
        assert_eq!(
            err.to_string(),
            "Invalid scheme (character '%' not permitted)"
        );
        assert_eq!(err.section(), Sections::SCHEME);
    }

    #[test]
    fn test_reg_name_message_without_character() {
        let err = UrlError::new(ErrorCode::InvalidRegName, None);
        assert_eq!(err.to_string(), "Hostname contains invalid characters");
    }

    #[test]
    fn test_generic_code_follows_section_order() {
        let bits = Sections::PATH | Sections::PORT;
        assert_eq!(ErrorCode::generic_for(bits), Some(ErrorCode::InvalidPort));
        assert_eq!(ErrorCode::generic_for(Sections::NONE), None);
    }
}
