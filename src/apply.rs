use alloc::string::{String, ToString};

use crate::error::OtError;
use crate::operation::Operation;

/// Apply an operation to a document, producing the new document text.
///
/// Pure function: the input text is never modified and identical inputs
/// always produce identical outputs. Offsets are character offsets, so
/// multi-byte UTF-8 content is spliced on character boundaries.
///
/// # Errors
///
/// Returns [`OtError::InvalidOperation`] when the operation addresses
/// positions outside the document: `position > len` for `Insert`, or
/// `position + length > len` for `Delete`, `Retain`, and `Style`.
/// `position == len` is valid for `Insert` (append) but invalid for a
/// `Delete` unless its length is zero.
///
/// # Example
///
/// ```
/// use ot_kit::prelude::*;
///
/// let text = apply("hello", &Operation::insert(5, " world"))?;
/// assert_eq!(text, "hello world");
///
/// let text = apply(&text, &Operation::delete(0, 6))?;
/// assert_eq!(text, "world");
/// # Ok::<(), ot_kit::OtError>(())
/// ```
pub fn apply(text: &str, op: &Operation) -> Result<String, OtError> {
    let text_len = text.chars().count();
    let out_of_bounds = || OtError::InvalidOperation {
        position: op.position(),
        span: op.span(),
        text_len,
    };

    match op {
        Operation::Insert {
            position, content, ..
        } => {
            if *position > text_len {
                return Err(out_of_bounds());
            }
            let at = byte_offset(text, *position);
            let mut result = String::with_capacity(text.len() + content.len());
            result.push_str(&text[..at]);
            result.push_str(content);
            result.push_str(&text[at..]);
            Ok(result)
        }
        Operation::Delete { position, length } => {
            if position + length > text_len {
                return Err(out_of_bounds());
            }
            let start = byte_offset(text, *position);
            let end = byte_offset(text, position + length);
            let mut result = String::with_capacity(text.len() - (end - start));
            result.push_str(&text[..start]);
            result.push_str(&text[end..]);
            Ok(result)
        }
        Operation::Retain {
            position, length, ..
        }
        | Operation::Style {
            position, length, ..
        } => {
            // Style data is tracked by the external rich-text layer; the
            // plain-text document is unchanged.
            if position + length > text_len {
                return Err(out_of_bounds());
            }
            Ok(text.to_string())
        }
    }
}

/// Byte offset of the character at `char_pos`, or the end of the text when
/// `char_pos` equals the character count. Callers validate bounds first.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Attributes;

    #[test]
    fn insert_at_beginning_middle_end() {
        assert_eq!(apply("bc", &Operation::insert(0, "a")).unwrap(), "abc");
        assert_eq!(apply("ac", &Operation::insert(1, "b")).unwrap(), "abc");
        assert_eq!(apply("ab", &Operation::insert(2, "c")).unwrap(), "abc");
    }

    #[test]
    fn insert_into_empty_text() {
        assert_eq!(apply("", &Operation::insert(0, "hi")).unwrap(), "hi");
    }

    #[test]
    fn insert_past_end_is_invalid() {
        let err = apply("ab", &Operation::insert(3, "x")).unwrap_err();
        assert_eq!(
            err,
            OtError::InvalidOperation {
                position: 3,
                span: 1,
                text_len: 2,
            }
        );
    }

    #[test]
    fn delete_middle_range() {
        assert_eq!(apply("abcdef", &Operation::delete(1, 2)).unwrap(), "adef");
    }

    #[test]
    fn delete_whole_text() {
        assert_eq!(apply("abc", &Operation::delete(0, 3)).unwrap(), "");
    }

    #[test]
    fn delete_overrunning_end_is_invalid() {
        assert!(apply("abc", &Operation::delete(2, 2)).is_err());
    }

    #[test]
    fn zero_length_delete_at_end_is_valid() {
        assert_eq!(apply("abc", &Operation::delete(3, 0)).unwrap(), "abc");
        assert!(apply("abc", &Operation::delete(3, 1)).is_err());
    }

    #[test]
    fn zero_length_delete_past_end_is_invalid() {
        assert!(apply("abc", &Operation::delete(4, 0)).is_err());
    }

    #[test]
    fn retain_and_style_leave_text_unchanged() {
        assert_eq!(apply("abc", &Operation::retain(0, 3)).unwrap(), "abc");
        let styled = Operation::style(1, 2, Attributes::new());
        assert_eq!(apply("abc", &styled).unwrap(), "abc");
    }

    #[test]
    fn retain_past_end_is_invalid() {
        assert!(apply("abc", &Operation::retain(1, 3)).is_err());
        assert!(apply("abc", &Operation::style(4, 0, Attributes::new())).is_err());
    }

    #[test]
    fn offsets_are_character_offsets() {
        // Multi-byte characters before the edit point must not skew it.
        assert_eq!(
            apply("héllo", &Operation::insert(5, "!")).unwrap(),
            "héllo!"
        );
        assert_eq!(apply("héllo", &Operation::delete(1, 1)).unwrap(), "hllo");
        assert_eq!(
            apply("日本語", &Operation::insert(1, "の")).unwrap(),
            "日の本語"
        );
    }

    #[test]
    fn apply_is_deterministic_and_non_mutating() {
        let text = "shared";
        let op = Operation::insert(3, "-");
        let first = apply(text, &op).unwrap();
        let second = apply(text, &op).unwrap();
        assert_eq!(first, second);
        assert_eq!(text, "shared");
    }
}
