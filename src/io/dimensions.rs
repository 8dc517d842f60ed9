//! Dimension text matcher
//!
//! Recognises the first `L x W x H` group in a piece of text: three runs of
//! ASCII digits separated by a lowercase `x`, with optional whitespace on
//! either side of each `x`. Text before or after the group is ignored, so
//! `10x20x30`, `10 x 20 x 30` and `box 10 x20 x 30cm` all match.

use crate::types::Dimensions;

/// Outcome of scanning text for dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionMatch {
    /// The first `L x W x H` group in the text
    Matched(Dimensions),
    /// No group in the text has the required shape
    NotMatched,
    /// A group was found but one of its numbers does not fit in a `u32`
    OutOfRange { digits: String },
}

/// Scan `text` for the first `L x W x H` group
pub fn scan_dimensions(text: &str) -> DimensionMatch {
    let bytes = text.as_bytes();

    for start in 0..bytes.len() {
        // a group can only begin where a digit run begins
        let starts_run =
            bytes[start].is_ascii_digit() && (start == 0 || !bytes[start - 1].is_ascii_digit());
        if !starts_run {
            continue;
        }

        if let Some(spans) = match_group_at(bytes, start) {
            let mut values = [0u32; 3];
            for (value, (from, to)) in values.iter_mut().zip(spans) {
                let digits = &text[from..to];
                match digits.parse::<u32>() {
                    Ok(parsed) => *value = parsed,
                    Err(_) => {
                        return DimensionMatch::OutOfRange {
                            digits: digits.to_string(),
                        }
                    }
                }
            }
            let [length, width, height] = values;
            return DimensionMatch::Matched(Dimensions::new(length, width, height));
        }
    }

    DimensionMatch::NotMatched
}

/// Try to match `digits ws* x ws* digits ws* x ws* digits` at `start`
///
/// Returns the byte spans of the three digit runs.
fn match_group_at(bytes: &[u8], start: usize) -> Option<[(usize, usize); 3]> {
    let mut spans = [(0, 0); 3];
    let mut pos = start;

    for (i, span) in spans.iter_mut().enumerate() {
        if i > 0 {
            pos = skip_whitespace(bytes, pos);
            if bytes.get(pos) != Some(&b'x') {
                return None;
            }
            pos = skip_whitespace(bytes, pos + 1);
        }

        let end = digit_run_end(bytes, pos);
        if end == pos {
            return None;
        }
        *span = (pos, end);
        pos = end;
    }

    Some(spans)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

fn digit_run_end(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}
