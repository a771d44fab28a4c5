use std::fmt;

/// Everything that can go wrong while parsing, resolving, or serializing a
/// [`Uri`](crate::Uri).
///
/// `BadPointer` from the taxonomy this is modeled on has no counterpart
/// here: a `&[u8]` or `Uri` is always backed by real memory, so the
/// null-pointer case it guards against cannot arise in a safely-typed API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriError {
    /// Input is not well-formed UTF-8: an invalid byte sequence, an overlong
    /// encoding, a UTF-16 surrogate half, a code point above U+10FFFF, or a
    /// truncated trailing sequence.
    Encoding,

    /// Input violates a structural or grammatical rule: a disallowed
    /// character (literal or after percent-decoding), a malformed percent
    /// escape, a NUL byte, a control character, an empty scheme, an
    /// unbalanced `[`, a `:` in the first segment of a relative path, or a
    /// relative path assigned to a URI that has an authority.
    Invalid,

    /// A port's numeric value exceeds 65535, or does not fit a reasonable
    /// integer parse at all.
    OutOfRange,

    /// Allocation failed while assembling a result.
    OutOfMemory,
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding => write!(f, "input is not well-formed UTF-8"),
            Self::Invalid => write!(f, "uri violates RFC 3986 grammar or a strictness rule"),
            Self::OutOfRange => write!(f, "numeric value is out of range"),
            Self::OutOfMemory => write!(f, "allocation failed"),
        }
    }
}

impl std::error::Error for UriError {}
