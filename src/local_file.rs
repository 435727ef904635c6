use crate::checkers::is_windows_drive_letter;
use crate::compat::{Cow, String, format};
use crate::scheme::{FILE, FTP, HTTP};
use crate::types::{ComponentFormattingOptions, ParsingMode};
use crate::url::Url;

/// Turn native separators into `/`. Only Windows paths use `\`.
fn from_native_separators(path: &str) -> Cow<'_, str> {
    if cfg!(windows) && path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/')
        || (cfg!(windows) && path.starts_with('\\'))
        || is_windows_drive_letter(path.as_bytes(), 0)
}

impl Url {
    /// Build a `file` URL from a local path.
    ///
    /// A drive letter gets a leading `/` (`C:/x` becomes `file:///C:/x`) and
    /// a `//server/share` path puts `server` in the host.
    pub fn from_local_file(local_file: &str) -> Self {
        let mut url = Self::new();
        url.set_scheme(Some(FILE));

        let deslashified = from_native_separators(local_file);
        let bytes = deslashified.as_bytes();
        let path: Cow<'_, str> = if bytes.len() > 1 && bytes[1] == b':' && bytes[0] != b'/' {
            Cow::Owned(format!("/{deslashified}"))
        } else if let Some(share) = deslashified.strip_prefix("//") {
            let host_end = share.find('/').unwrap_or(share.len());
            url.set_host(Some(&share[..host_end]));
            Cow::Borrowed(&share[host_end..])
        } else {
            Cow::Borrowed(&deslashified)
        };

        // a literal '%' in a file name is data, not an escape
        url.set_path(&path.replace('%', "%25"));
        url
    }

    /// The local path of a `file` URL, or `None` for other schemes.
    /// A host comes back as a `//server` prefix.
    pub fn to_local_file(&self) -> Option<String> {
        if !self.is_local_file() {
            return None;
        }
        let path = self.path_with(ComponentFormattingOptions::FULLY_DECODED);

        if let Some(host) = self.host().filter(|host| !host.is_empty()) {
            let separator = if path.is_empty() || path.starts_with('/') { "" } else { "/" };
            return Some(format!("//{host}{separator}{path}"));
        }

        let bytes = path.as_bytes();
        if bytes.len() > 2 && bytes[0] == b'/' && bytes[2] == b':' {
            return Some(path[1..].into());
        }
        Some(path.into_owned())
    }

    /// Check if the scheme is `file`
    pub fn is_local_file(&self) -> bool {
        self.d.is_local_file()
    }

    /// Guess a URL from loosely typed text, as a user would enter it.
    ///
    /// Absolute paths become `file` URLs. Text that already parses with a
    /// scheme is kept, unless it reads better as `host:port`; otherwise
    /// `http://` is assumed (`ftp://` when the first label is `ftp`).
    /// Returns an empty URL when nothing fits.
    pub fn from_user_input(user_input: &str) -> Self {
        let trimmed = user_input.trim();

        if is_absolute_path(trimmed) {
            return Self::from_local_file(trimmed);
        }

        let url = Self::parse(trimmed, ParsingMode::Tolerant);
        let mut prepended = Self::parse(&format!("{HTTP}://{trimmed}"), ParsingMode::Tolerant);
        let has_location = |url: &Self| {
            url.host().is_some_and(|host| !host.is_empty()) || !url.path().is_empty()
        };

        if url.is_valid() && url.has_scheme() && has_location(&url) && prepended.port().is_none() {
            return url;
        }

        if prepended.is_valid() && has_location(&prepended) {
            let first_label = trimmed.split('.').next().unwrap_or(trimmed);
            if first_label.eq_ignore_ascii_case(FTP) {
                prepended.set_scheme(Some(FTP));
            }
            return prepended;
        }

        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_local_file() {
        let url = Url::from_local_file("/tmp/a b.txt");
        assert_eq!(url.scheme(), Some("file"));
        assert_eq!(url.path(), "/tmp/a b.txt");
        assert_eq!(url.to_encoded(), "file:///tmp/a%20b.txt");
        assert_eq!(url.to_local_file().as_deref(), Some("/tmp/a b.txt"));
    }

    #[test]
    fn test_percent_in_file_name() {
        let url = Url::from_local_file("/data/100%.txt");
        assert_eq!(url.to_local_file().as_deref(), Some("/data/100%.txt"));

        let url = Url::from_local_file("/data/%41");
        assert_eq!(url.to_local_file().as_deref(), Some("/data/%41"));
    }

    #[test]
    fn test_shared_drive() {
        let url = Url::from_local_file("//server/share/f");
        assert_eq!(url.host(), Some("server"));
        assert_eq!(url.path(), "/share/f");
        assert_eq!(url.to_local_file().as_deref(), Some("//server/share/f"));

        let url = Url::from_local_file("//server");
        assert_eq!(url.host(), Some("server"));
        assert_eq!(url.path(), "");
    }

    #[test]
    fn test_drive_letter() {
        let url = Url::from_local_file("C:/Windows/win.ini");
        assert_eq!(url.path(), "/C:/Windows/win.ini");
        assert_eq!(url.to_string(), "file:///C:/Windows/win.ini");
        assert_eq!(url.to_local_file().as_deref(), Some("C:/Windows/win.ini"));
    }

    #[test]
    fn test_to_local_file_requires_file_scheme() {
        let url = Url::parse("http://h/x", ParsingMode::Tolerant);
        assert!(!url.is_local_file());
        assert_eq!(url.to_local_file(), None);
    }

    #[test]
    fn test_from_user_input() {
        assert_eq!(
            Url::from_user_input("  example.com/x  ").to_string(),
            "http://example.com/x"
        );
        assert_eq!(
            Url::from_user_input("localhost:8080").to_string(),
            "http://localhost:8080"
        );
        assert_eq!(
            Url::from_user_input("ftp.example.org").to_string(),
            "ftp://ftp.example.org"
        );
        assert_eq!(
            Url::from_user_input("https://example.com").to_string(),
            "https://example.com"
        );
        assert_eq!(
            Url::from_user_input("/etc/hosts").to_string(),
            "file:///etc/hosts"
        );
        assert!(Url::from_user_input("").is_empty());
    }
}
