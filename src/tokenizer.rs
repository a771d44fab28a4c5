//! The single-pass tokenizer (§4.2): splits an ASCII reference string into
//! its seven raw components, preserving the absent/empty distinction.

use crate::charset::is_scheme;
use crate::component::Component;
use crate::error::UriError;

/// Raw, not-yet-validated component strings in tokenizer order.
pub(crate) struct RawParts {
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<String>,
    pub(crate) path: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl RawParts {
    /// Components in the construction order the rest of the pipeline
    /// depends on: scheme before authority sub-components, all of those
    /// before path, path before query/fragment.
    pub(crate) fn into_ordered(self) -> [(Component, Option<String>); 7] {
        [
            (Component::Scheme, self.scheme),
            (Component::UserInfo, self.userinfo),
            (Component::Host, self.host),
            (Component::Port, self.port),
            (Component::Path, self.path),
            (Component::Query, self.query),
            (Component::Fragment, self.fragment),
        ]
    }

    pub(crate) fn has_authority(&self) -> bool {
        self.userinfo.is_some() || self.host.is_some() || self.port.is_some()
    }
}

/// Reads a maximal scheme-class run starting at an ALPHA byte, returning its
/// length (excluding the colon) if immediately followed by `:`.
pub(crate) fn accept_scheme(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && is_scheme(bytes[i]) {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b':' {
        Some(i)
    } else {
        None
    }
}

pub(crate) fn tokenize(s: &str) -> Result<RawParts, UriError> {
    let mut buf = s;

    let fragment = match buf.find('#') {
        Some(i) => {
            let f = buf[i + 1..].to_string();
            buf = &buf[..i];
            Some(f)
        }
        None => None,
    };

    let query = match buf.find('?') {
        Some(i) => {
            let q = buf[i + 1..].to_string();
            buf = &buf[..i];
            Some(q)
        }
        None => None,
    };

    let scheme = match accept_scheme(buf) {
        Some(len) => {
            let scheme = buf[..len].to_string();
            buf = &buf[len + 1..];
            Some(scheme)
        }
        None => None,
    };

    if scheme.is_none() {
        let limit = buf.find('/').unwrap_or(buf.len());
        if buf[..limit].contains(':') {
            return Err(UriError::Invalid);
        }
    }

    let mut userinfo = None;
    let mut host = None;
    let mut port = None;
    let mut path = None;

    if let Some(rest) = buf.strip_prefix("//") {
        buf = rest;

        // Path is reserved from the authority buffer *before* userinfo/host/
        // port parsing. Mirrors the source's `str_take_from(str, '/', 0)`:
        // if no '/' is found at all, path stays absent, not present-empty.
        match buf.find('/') {
            Some(i) => {
                path = Some(buf[i..].to_string());
                buf = &buf[..i];
            }
            None => {}
        }

        if let Some(i) = buf.find('@') {
            userinfo = Some(buf[..i].to_string());
            buf = &buf[i + 1..];
        }

        if let Some(rest) = buf.strip_prefix('[') {
            match rest.find(']') {
                Some(i) => {
                    host = Some(format!("[{}]", &rest[..i]));
                    buf = &rest[i + 1..];
                }
                None => return Err(UriError::Invalid),
            }
        } else {
            match buf.find(':') {
                Some(i) => {
                    host = Some(buf[..i].to_string());
                    buf = &buf[i..];
                }
                None => {
                    host = Some(buf.to_string());
                    buf = "";
                }
            }
        }

        if let Some(rest) = buf.strip_prefix(':') {
            port = Some(rest.to_string());
        }
    } else if !buf.is_empty() {
        path = Some(buf.to_string());
    }

    Ok(RawParts {
        scheme,
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_uri() {
        let r = tokenize("http://user@host:80/path?query#fragment").unwrap();
        assert_eq!(r.scheme.as_deref(), Some("http"));
        assert_eq!(r.userinfo.as_deref(), Some("user"));
        assert_eq!(r.host.as_deref(), Some("host"));
        assert_eq!(r.port.as_deref(), Some("80"));
        assert_eq!(r.path.as_deref(), Some("/path"));
        assert_eq!(r.query.as_deref(), Some("query"));
        assert_eq!(r.fragment.as_deref(), Some("fragment"));
    }

    #[test]
    fn empty_authority_is_present_not_absent() {
        // http:////evil.com/ : "//" consumed, authority runs up to next '/',
        // which is immediately there -- host is empty, not absent, and the
        // remaining "//evil.com/" becomes the path.
        let r = tokenize("http:////evil.com/").unwrap();
        assert_eq!(r.scheme.as_deref(), Some("http"));
        assert!(r.has_authority());
        assert_eq!(r.host.as_deref(), Some(""));
        assert_eq!(r.path.as_deref(), Some("//evil.com/"));
    }

    #[test]
    fn relative_path_with_colon_before_slash_is_invalid() {
        assert_eq!(tokenize("a:b/c").unwrap_err(), UriError::Invalid);
    }

    #[test]
    fn scheme_colon_survives_when_colon_after_slash() {
        let r = tokenize("a/b:c").unwrap();
        assert!(r.scheme.is_none());
        assert_eq!(r.path.as_deref(), Some("a/b:c"));
    }

    #[test]
    fn ipv6_bracket_host() {
        let r = tokenize("http://[::1]:8080/").unwrap();
        assert_eq!(r.host.as_deref(), Some("[::1]"));
        assert_eq!(r.port.as_deref(), Some("8080"));
    }

    #[test]
    fn unbalanced_bracket_is_invalid() {
        assert_eq!(tokenize("http://[::1/x").unwrap_err(), UriError::Invalid);
    }

    #[test]
    fn no_authority_path_only() {
        let r = tokenize("/a/b/c").unwrap();
        assert!(!r.has_authority());
        assert_eq!(r.path.as_deref(), Some("/a/b/c"));
    }

    #[test]
    fn scheme_with_no_slash_data_uri() {
        let r = tokenize("data:text/html,abc").unwrap();
        assert_eq!(r.scheme.as_deref(), Some("data"));
        assert!(!r.has_authority());
        assert_eq!(r.path.as_deref(), Some("text/html,abc"));
    }

    #[test]
    fn path_is_absent_when_no_slash_follows_authority() {
        // CVE-2022-0686: a bare "scheme://host:" with nothing after it has
        // no '/' anywhere past the authority, so path must stay absent
        // rather than collapse to present-but-empty.
        let r = tokenize("http://example.com:").unwrap();
        assert_eq!(r.host.as_deref(), Some("example.com"));
        assert_eq!(r.port.as_deref(), Some(""));
        assert_eq!(r.path, None);

        // CVE-2022-27780: the escaped slash in the host doesn't count as
        // the real separator, so there's still no '/' in the buffer.
        let r = tokenize("http://example.com%2F127.0.0.1").unwrap();
        assert_eq!(r.scheme.as_deref(), Some("http"));
        assert_eq!(r.host.as_deref(), Some("example.com%2F127.0.0.1"));
        assert_eq!(r.path, None);
    }
}
