use crate::compat::{Cow, String};
use crate::types::ComponentFormattingOptions;
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{Component, recode_component};
use crate::url_components::UrlComponents;
use core::fmt::Write;

/// Which components to leave out of a reassembled URL, plus how the
/// remaining components are decoded.
///
/// Removal flags combine with `|`. Or-ing in a [`ComponentFormattingOptions`]
/// replaces the decoding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormattingOptions {
    flags: u16,
    component: ComponentFormattingOptions,
}

impl FormattingOptions {
    const fn flag(flags: u16) -> Self {
        Self {
            flags,
            component: ComponentFormattingOptions::PRETTY_DECODED,
        }
    }

    pub const NONE: Self = Self::flag(0);
    pub const REMOVE_SCHEME: Self = Self::flag(0x1);
    pub const REMOVE_PASSWORD: Self = Self::flag(0x2);
    pub const REMOVE_USER_INFO: Self = Self::flag(0x2 | 0x4);
    pub const REMOVE_PORT: Self = Self::flag(0x8);
    pub const REMOVE_AUTHORITY: Self = Self::flag(0x2 | 0x4 | 0x8 | 0x10);
    pub const REMOVE_PATH: Self = Self::flag(0x20);
    pub const REMOVE_QUERY: Self = Self::flag(0x40);
    pub const REMOVE_FRAGMENT: Self = Self::flag(0x80);
    /// Emit just the path for a local file with no query or fragment shown
    pub const PREFER_LOCAL_FILE: Self = Self::flag(0x200);
    pub const STRIP_TRAILING_SLASH: Self = Self::flag(0x400);

    /// True when every removal flag of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.flags & other.flags == other.flags
    }

    /// The decoding policy applied to each component
    pub const fn component_options(self) -> ComponentFormattingOptions {
        self.component
    }
}

impl core::ops::BitOr for FormattingOptions {
    type Output = Self;

    /// Unions the removal flags; a non-default decoding policy on the left
    /// wins over the right.
    fn bitor(self, rhs: Self) -> Self {
        let component = if self.component == ComponentFormattingOptions::PRETTY_DECODED {
            rhs.component
        } else {
            self.component
        };
        Self {
            flags: self.flags | rhs.flags,
            component,
        }
    }
}

impl core::ops::BitOr<ComponentFormattingOptions> for FormattingOptions {
    type Output = Self;

    fn bitor(self, rhs: ComponentFormattingOptions) -> Self {
        Self {
            flags: self.flags,
            component: rhs,
        }
    }
}

impl From<ComponentFormattingOptions> for FormattingOptions {
    fn from(component: ComponentFormattingOptions) -> Self {
        Self::NONE | component
    }
}

impl UrlComponents {
    pub fn user_name_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        let user_name = self.user_name.as_deref()?;
        Some(recode_component(user_name, Component::UserName, options))
    }

    pub fn password_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        let password = self.password.as_deref()?;
        Some(recode_component(password, Component::Password, options))
    }

    /// Registered names are emitted in ASCII-compatible form unless
    /// `DECODE_UNICODE` is requested; IP literals never change.
    pub fn host_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        let host = self.host.as_deref()?;
        if host.is_ascii() || options.contains(ComponentFormattingOptions::DECODE_UNICODE) {
            return Some(Cow::Borrowed(host));
        }
        Some(domain_to_ascii(host).map_or(Cow::Borrowed(host), Cow::Owned))
    }

    pub fn path_with(&self, options: ComponentFormattingOptions) -> Cow<'_, str> {
        recode_component(&self.path, Component::Path, options)
    }

    pub fn query_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        let query = self.query.as_deref()?;
        Some(recode_component(query, Component::Query, options))
    }

    pub fn fragment_with(&self, options: ComponentFormattingOptions) -> Option<Cow<'_, str>> {
        let fragment = self.fragment.as_deref()?;
        Some(recode_component(fragment, Component::Fragment, options))
    }

    /// `user[:password]`; ambiguous delimiters are never decoded here, since
    /// the result has to be re-parseable inside an authority.
    pub fn append_user_info(&self, out: &mut String, options: FormattingOptions) {
        let mut component = options.component;
        if component.contains(ComponentFormattingOptions::DECODE_ALL_DELIMITERS) {
            component = component.without(ComponentFormattingOptions::DECODE_ALL_DELIMITERS)
                | ComponentFormattingOptions::DECODE_UNAMBIGUOUS_DELIMITERS;
        }
        if let Some(user_name) = self.user_name_with(component) {
            out.push_str(&user_name);
        }
        if options.contains(FormattingOptions::REMOVE_PASSWORD) {
            return;
        }
        if let Some(password) = self.password_with(component) {
            out.push(':');
            out.push_str(&password);
        }
    }

    pub fn append_authority(&self, out: &mut String, options: FormattingOptions) {
        if !options.contains(FormattingOptions::REMOVE_USER_INFO) {
            self.append_user_info(out, options);
            if self.has_user_info() {
                out.push('@');
            }
        }
        if let Some(host) = self.host_with(options.component) {
            out.push_str(&host);
        }
        if !options.contains(FormattingOptions::REMOVE_PORT)
            && let Some(port) = self.port
        {
            let _ = write!(out, ":{port}");
        }
    }

    /// Reassemble the URL text.
    pub fn to_string_with(&self, options: FormattingOptions) -> String {
        let component = options.component;
        let show_query = self.query.is_some() && !options.contains(FormattingOptions::REMOVE_QUERY);
        let show_fragment =
            self.fragment.is_some() && !options.contains(FormattingOptions::REMOVE_FRAGMENT);

        if options.contains(FormattingOptions::PREFER_LOCAL_FILE)
            && !options.contains(FormattingOptions::REMOVE_PATH)
            && !show_query
            && !show_fragment
            && self.is_local_file()
        {
            return self.path_with(component).into_owned();
        }

        let mut url = String::with_capacity(self.path.len() + 32);

        if !options.contains(FormattingOptions::REMOVE_SCHEME)
            && let Some(scheme) = &self.scheme
        {
            url.push_str(scheme);
            url.push(':');
        }

        let path_is_absolute = self.path.starts_with('/');
        if !options.contains(FormattingOptions::REMOVE_AUTHORITY) && self.has_authority() {
            url.push_str("//");
            self.append_authority(&mut url, options);
        } else if self.is_local_file() && path_is_absolute {
            url.push_str("//");
        }

        if !options.contains(FormattingOptions::REMOVE_PATH) {
            // a rootless path after an authority needs a separator
            if !path_is_absolute && !self.path.is_empty() && !url.is_empty() && !url.ends_with(':') {
                url.push('/');
            }
            url.push_str(&self.path_with(component));
            if options.contains(FormattingOptions::STRIP_TRAILING_SLASH) {
                while url.ends_with('/') {
                    url.pop();
                }
            }
        }

        if show_query && let Some(query) = self.query_with(component) {
            url.push('?');
            url.push_str(&query);
        }
        if show_fragment && let Some(fragment) = self.fragment_with(component) {
            url.push('#');
            url.push_str(&fragment);
        }
        url
    }
}
