//! Quote-aware CSV line tokenizer
//!
//! Rewrites one raw line in place: ASCII letters are lower-cased and every
//! comma outside a quoted field is replaced with the unit separator byte, so
//! the decoder can split on a single character that cannot occur in field
//! content. Operates on the caller's buffer without allocating.

use crate::constants::{MAX_LINE_LENGTH, UNIT_SEPARATOR};

/// Tokenize one CSV line in place.
///
/// Quote tracking is asymmetric: a `"` that is not immediately followed by a
/// comma enters a quoted field, a `"` immediately followed by a comma leaves
/// it. This matches the closing-quote-precedes-comma convention of AQS
/// extracts. Known limitation: a field containing an internal unescaped
/// quote that is not followed by a comma mis-toggles the state.
///
/// Processing stops at [`MAX_LINE_LENGTH`] bytes; anything beyond the bound
/// is left untouched.
pub fn tokenize(line: &mut [u8]) {
    let bound = line.len().min(MAX_LINE_LENGTH);
    let mut in_quotes = false;

    for i in 0..bound {
        line[i] = line[i].to_ascii_lowercase();

        if line[i] == b'"' {
            if line.get(i + 1) == Some(&b',') {
                in_quotes = false;
            } else {
                in_quotes = true;
            }
        }

        if !in_quotes && line[i] == b',' {
            line[i] = UNIT_SEPARATOR;
        }
    }
}
