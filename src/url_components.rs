use crate::compat::String;
use crate::error::{ErrorCode, UrlError};
use crate::host::parse_host;
use crate::scheme::{FILE, normalize_scheme};
use crate::types::Sections;
use crate::unicode::percent_encode::{Component, recode_from_user};

/// The stored components of a URL, each in its pretty-decoded form.
///
/// `None` means the component is absent; `Some("")` means it was given
/// but is empty (an `@` with nothing before it, a bare `?`, ...). The path
/// is always present.
#[derive(Debug, Clone, Default)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    /// Components currently in error
    pub errors: Sections,
    /// The most recently recorded error
    pub error: Option<UrlError>,
}

impl UrlComponents {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence bit set derived from the stored components
    pub fn present(&self) -> Sections {
        let mut bits = Sections::NONE;
        bits.set(Sections::SCHEME, self.scheme.is_some());
        bits.set(Sections::USER_NAME, self.user_name.is_some());
        bits.set(Sections::PASSWORD, self.password.is_some());
        bits.set(Sections::HOST, self.host.is_some());
        bits.set(Sections::PORT, self.port.is_some());
        bits.set(Sections::PATH, !self.path.is_empty());
        bits.set(Sections::QUERY, self.query.is_some());
        bits.set(Sections::FRAGMENT, self.fragment.is_some());
        bits
    }

    pub fn has_authority(&self) -> bool {
        self.present().intersects(Sections::AUTHORITY)
    }

    pub fn has_user_info(&self) -> bool {
        self.user_name.is_some() || self.password.is_some()
    }

    pub fn is_local_file(&self) -> bool {
        self.scheme.as_deref() == Some(FILE)
    }

    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }

    /// The error to report: the stored one if its component is still in
    /// error, otherwise the generic code of the first errored component.
    pub fn current_error(&self) -> Option<UrlError> {
        if self.errors.is_empty() {
            return None;
        }
        match self.error {
            Some(error) if self.errors.intersects(error.section()) => Some(error),
            _ => ErrorCode::generic_for(self.errors).map(|code| UrlError::new(code, None)),
        }
    }

    pub fn record_error(&mut self, error: UrlError) {
        tracing::debug!(
            code = ?error.code(),
            supplement = ?error.supplement(),
            "url component rejected"
        );
        self.errors.insert(error.section());
        self.error = Some(error);
    }

    pub fn set_scheme(&mut self, scheme: Option<&str>) {
        self.errors.remove(Sections::SCHEME);
        self.scheme = None;
        let Some(scheme) = scheme else {
            return;
        };
        match normalize_scheme(scheme) {
            Ok(scheme) => self.scheme = Some(scheme),
            Err(error) => self.record_error(error),
        }
    }

    pub fn set_user_name(&mut self, user_name: Option<&str>) {
        self.errors.remove(Sections::USER_NAME);
        self.user_name =
            user_name.map(|value| recode_from_user(value, Component::UserName).into_owned());
    }

    pub fn set_password(&mut self, password: Option<&str>) {
        self.errors.remove(Sections::PASSWORD);
        self.password =
            password.map(|value| recode_from_user(value, Component::Password).into_owned());
    }

    /// Split at the first `:` into user name and password
    pub fn set_user_info(&mut self, user_info: Option<&str>) {
        let Some(user_info) = user_info else {
            self.set_user_name(None);
            self.set_password(None);
            return;
        };
        match user_info.split_once(':') {
            Some((user_name, password)) => {
                self.set_user_name(Some(user_name));
                self.set_password(Some(password));
            }
            None => {
                self.set_user_name(Some(user_info));
                self.set_password(None);
            }
        }
    }

    /// Classify and store a host. A rejected host stays present but empty.
    pub fn set_host(&mut self, host: Option<&str>) -> bool {
        self.errors.remove(Sections::HOST);
        let Some(host) = host else {
            self.host = None;
            return true;
        };
        match parse_host(host) {
            Ok(host) => {
                self.host = Some(host);
                true
            }
            Err(error) => {
                self.host = Some(String::new());
                self.record_error(error);
                false
            }
        }
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.errors.remove(Sections::PORT);
        self.port = port;
    }

    pub fn set_path(&mut self, path: &str) {
        self.errors.remove(Sections::PATH);
        self.path = recode_from_user(path, Component::Path).into_owned();
    }

    pub fn set_query(&mut self, query: Option<&str>) {
        self.errors.remove(Sections::QUERY);
        self.query = query.map(|value| recode_from_user(value, Component::Query).into_owned());
    }

    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.errors.remove(Sections::FRAGMENT);
        self.fragment =
            fragment.map(|value| recode_from_user(value, Component::Fragment).into_owned());
    }
}
