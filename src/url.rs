use crate::compat::{Arc, Cow, String, ToString, format};
use crate::error::{Result, UrlError};
use crate::format::FormattingOptions;
use crate::parser::parse_components;
use crate::types::{ComponentFormattingOptions, ParsingMode, Sections};
use crate::url_components::UrlComponents;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// A URI reference, stored as validated and normalized components.
///
/// Values are cheap to clone: the components are shared until one of the
/// copies is modified.
///
/// ```
/// use uriel::{ParsingMode, Url};
///
/// let url = Url::parse("HTTP://Example.COM/a/./b?q", ParsingMode::Tolerant);
/// assert_eq!(url.scheme(), Some("http"));
/// assert_eq!(url.host(), Some("example.com"));
/// assert_eq!(url.path(), "/a/./b");
/// assert!(url.is_valid());
/// ```
#[derive(Clone, Default)]
pub struct Url {
    pub(crate) d: Arc<UrlComponents>,
}

type ComparisonKey<'a> = (
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<u16>,
    &'a str,
    Option<&'a str>,
    Option<&'a str>,
);

impl Url {
    /// Create an empty URL
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI reference. Never fails; check [`Url::is_valid`].
    pub fn parse(input: &str, mode: ParsingMode) -> Self {
        Self {
            d: Arc::new(parse_components(input, mode)),
        }
    }

    /// Parse and return the first error if the result is invalid
    pub fn try_parse(input: &str, mode: ParsingMode) -> Result<Self> {
        let url = Self::parse(input, mode);
        match url.error() {
            Some(error) => Err(error),
            None => Ok(url),
        }
    }

    /// Check if `input` parses into a valid URL
    pub fn can_parse(input: &str, mode: ParsingMode) -> bool {
        Self::parse(input, mode).is_valid()
    }

    /// Parse an encoded byte form; invalid UTF-8 becomes U+FFFD
    pub fn from_encoded(input: &[u8], mode: ParsingMode) -> Self {
        Self::parse(&String::from_utf8_lossy(input), mode)
    }

    /// Replace the whole value with a new parse
    pub fn set_url(&mut self, input: &str, mode: ParsingMode) {
        *self.d_mut() = parse_components(input, mode);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn d_mut(&mut self) -> &mut UrlComponents {
        Arc::make_mut(&mut self.d)
    }

    /// Check if this value does not share its components with any clone
    pub fn is_detached(&self) -> bool {
        Arc::strong_count(&self.d) == 1
    }

    // Component getters return the stored (pretty-decoded) form

    pub fn scheme(&self) -> Option<&str> {
        self.d.scheme.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.d.user_name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.d.password.as_deref()
    }

    /// The host; IP literals keep their brackets
    pub fn host(&self) -> Option<&str> {
        self.d.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.d.port
    }

    /// The port, or `default` when none is set
    pub fn port_or(&self, default: u16) -> u16 {
        self.d.port.unwrap_or(default)
    }

    pub fn path(&self) -> &str {
        &self.d.path
    }

    pub fn query(&self) -> Option<&str> {
        self.d.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.d.fragment.as_deref()
    }

    // Formatted getters

    pub fn user_name_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        self.d.user_name_with(options)
    }

    pub fn password_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        self.d.password_with(options)
    }

    /// The host, in ASCII-compatible form unless `DECODE_UNICODE` is set
    pub fn host_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        self.d.host_with(options)
    }

    pub fn path_with(&self, options: ComponentFormattingOptions) -> Cow<'_, str> {
        self.d.path_with(options)
    }

    pub fn query_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        self.d.query_with(options)
    }

    pub fn fragment_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        self.d.fragment_with(options)
    }

    /// `user[:password]`, or `None` without user info
    pub fn user_info(&self, options: ComponentFormattingOptions) -> Option<String> {
        if !self.d.has_user_info() {
            return None;
        }
        let mut out = String::new();
        self.d.append_user_info(&mut out, options.into());
        Some(out)
    }

    /// `[userinfo@]host[:port]`, or `None` without an authority
    pub fn authority(&self, options: ComponentFormattingOptions) -> Option<String> {
        if !self.d.has_authority() {
            return None;
        }
        let mut out = String::new();
        self.d.append_authority(&mut out, options.into());
        Some(out)
    }

    pub fn has_scheme(&self) -> bool {
        self.d.scheme.is_some()
    }

    pub fn has_user_info(&self) -> bool {
        self.d.has_user_info()
    }

    pub fn has_password(&self) -> bool {
        self.d.password.is_some()
    }

    pub fn has_authority(&self) -> bool {
        self.d.has_authority()
    }

    pub fn has_query(&self) -> bool {
        self.d.query.is_some()
    }

    pub fn has_fragment(&self) -> bool {
        self.d.fragment.is_some()
    }

    // Setters: `None` removes a component, `Some("")` leaves it present but empty

    pub fn set_scheme(&mut self, scheme: Option<&str>) {
        self.d_mut().set_scheme(scheme);
    }

    pub fn set_user_name(&mut self, user_name: Option<&str>) {
        self.d_mut().set_user_name(user_name);
    }

    pub fn set_password(&mut self, password: Option<&str>) {
        self.d_mut().set_password(password);
    }

    /// Set `user[:password]`; surrounding whitespace is trimmed
    pub fn set_user_info(&mut self, user_info: Option<&str>) {
        self.d_mut().set_user_info(user_info.map(str::trim));
    }

    pub fn set_authority(&mut self, authority: Option<&str>) {
        self.d_mut().set_authority(authority);
    }

    /// Set the host.
    ///
    /// A host that fails and is not bracketed is retried once inside
    /// brackets, so that bare IPv6 addresses are accepted. If that also
    /// fails, the first error is kept unless the input contains a `:`.
    pub fn set_host(&mut self, host: Option<&str>) {
        let d = self.d_mut();
        let Some(host) = host else {
            d.set_host(None);
            return;
        };
        if d.set_host(Some(host)) || host.starts_with('[') {
            return;
        }

        let first_error = d.error;
        tracing::trace!(host, "retrying host as an IP literal");
        if !d.set_host(Some(&format!("[{host}]"))) && !host.contains(':') {
            d.error = first_error;
        }
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.d_mut().set_port(port);
    }

    pub fn set_path(&mut self, path: &str) {
        self.d_mut().set_path(path);
    }

    /// Set the query. Its delimiters are stored as given.
    pub fn set_query(&mut self, query: Option<&str>) {
        self.d_mut().set_query(query);
    }

    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.d_mut().set_fragment(fragment);
    }

    // Validity

    /// Check if no component is set
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Check if the URL is non-empty and no component is in error
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && self.d.errors.is_empty()
    }

    /// The components currently in error
    pub fn error_sections(&self) -> Sections {
        self.d.errors
    }

    pub fn error(&self) -> Option<UrlError> {
        self.d.current_error()
    }

    /// A human-readable description of the error, empty when there is none
    pub fn error_string(&self) -> String {
        self.error().map(|error| error.to_string()).unwrap_or_default()
    }

    // Formatting

    pub fn to_string_with(&self, options: FormattingOptions) -> String {
        self.d.to_string_with(options)
    }

    /// Like [`Url::to_string_with`], but the password is never shown
    pub fn to_display_string_with(&self, options: FormattingOptions) -> String {
        self.d.to_string_with(options | FormattingOptions::REMOVE_PASSWORD)
    }

    /// The fully encoded form: ASCII only, host in ASCII-compatible form
    pub fn to_encoded(&self) -> String {
        self.to_encoded_with(FormattingOptions::NONE)
    }

    pub fn to_encoded_with(&self, options: FormattingOptions) -> String {
        self.d.to_string_with(options | ComponentFormattingOptions::FULLY_ENCODED)
    }

    // Relations

    /// Resolve a reference against this URL
    pub fn resolved(&self, relative: &Self) -> Self {
        let result = Self {
            d: Arc::new(self.d.resolved(&relative.d)),
        };
        tracing::trace!(base = %self, relative = %relative, result = %result, "resolved reference");
        result
    }

    /// Check if there is no scheme and the path is not absolute
    pub fn is_relative(&self) -> bool {
        self.d.scheme.is_none() && !self.d.path.starts_with('/')
    }

    /// Check if `child` lies below this URL: same scheme and authority
    /// (where the child has them) and a path extending ours at a `/`
    pub fn is_parent_of(&self, child: &Self) -> bool {
        let options = ComponentFormattingOptions::default();
        let our_path = self.path();
        let child_path = child.path();

        let same_scheme = child.scheme().is_none() || self.scheme() == child.scheme();
        let child_authority = child.authority(options).unwrap_or_default();
        let same_authority = child_authority.is_empty()
            || self.authority(options).unwrap_or_default() == child_authority;

        let below = child_path.len() > our_path.len()
            && child_path.starts_with(our_path)
            && (our_path.ends_with('/') || child_path.as_bytes()[our_path.len()] == b'/');

        same_scheme && same_authority && below
    }

    fn comparison_key(&self) -> ComparisonKey<'_> {
        (
            self.scheme(),
            self.user_name(),
            self.password(),
            self.host(),
            self.port(),
            self.path(),
            self.query(),
            self.fragment(),
        )
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.d, &other.d) || self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Url {}

impl PartialOrd for Url {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Url {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s, ParsingMode::Tolerant)
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display_string_with(FormattingOptions::default()))
    }
}

impl core::fmt::Debug for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Url").field(&self.to_string()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_encoded())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s, ParsingMode::Tolerant))
    }
}
