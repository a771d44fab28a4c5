//! # Defensive RFC 3986 URI handling
//!
//! This crate parses, normalizes, mutates, and re-serializes Uniform
//! Resource Identifiers. It favors *defensive strictness* over permissive
//! parsing: it deliberately rejects a number of inputs that browsers and
//! looser URL parsers accept, in order to close off a family of well-known
//! URI-confusion vulnerabilities — CRLF injection, NUL truncation,
//! authority/path smuggling, percent-encoding confusion, overlong UTF-8,
//! and double-decoding path traversal.
//!
//! The crate exposes a single owned value type, [`Uri`], built around seven
//! optional components (`scheme`, `userinfo`, `host`, `port`, `path`,
//! `query`, `fragment`). Absence and present-but-empty are always
//! distinguished for every component.
//!
//! ```
//! use rfc3986_uri::Uri;
//!
//! let mut base = Uri::parse("http://a/b/c/d;p?q").unwrap();
//! base.set(b"../../../../g").unwrap();
//! assert_eq!(base.serialize().unwrap(), "http://a/g");
//! ```
//!
//! ## What this crate does not do
//!
//! No networking, DNS resolution, or scheme-specific semantics. No
//! IDN/Punycode conversion of hosts. No query-string parsing. No
//! default-port substitution. No Unicode normalization of any component.
//! These are scoping decisions, not omissions: a library meant to carry
//! URIs safely across a security boundary should not also be guessing at
//! what a scheme's payload means.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

mod charset;
mod component;
mod error;
mod gate;
mod path;
mod percent;
mod tokenizer;
mod uri;

pub use error::UriError;
pub use uri::Uri;
