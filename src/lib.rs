//! RFC 3986 URI references: tolerant and strict parsing, per-component
//! percent-encoding rules, internationalized host names, reference
//! resolution and configurable reassembly.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod format;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod local_file;
mod parser;
mod path;
mod resolve;
mod scheme;
mod types;
mod unicode;
mod url;
mod url_components;

// Public API
pub use error::{ErrorCode, Result, UrlError};
pub use format::FormattingOptions;
pub use types::{ComponentFormattingOptions, ParsingMode, Sections};
pub use unicode::idna::{from_ace, to_ace};
pub use unicode::percent_encode::{from_percent_encoding, to_percent_encoding};
pub use url::Url;
