//! The input gate (§4.1): UTF-8 well-formedness, C0/C1 rejection, then
//! auto-percent-encoding of every non-ASCII byte.

use crate::error::UriError;
use crate::percent::percent_encode_non_ascii;

/// Runs every externally supplied byte string through the gate, producing
/// the canonical ASCII string handed to the tokenizer.
pub(crate) fn input_gate(bytes: &[u8]) -> Result<String, UriError> {
    let s = std::str::from_utf8(bytes).map_err(|_| UriError::Encoding)?;
    if s.chars().any(is_c0_or_c1_char) {
        return Err(UriError::Invalid);
    }
    Ok(percent_encode_non_ascii(s))
}

fn is_c0_or_c1_char(c: char) -> bool {
    let cp = c as u32;
    cp <= 0x1F || cp == 0x7F || (0x80..=0x9F).contains(&cp)
}
