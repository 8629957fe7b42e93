use alloc::string::String;
use alloc::vec::Vec;

use crate::operation::Operation;

/// Collapse a causally-ordered sequence of operations from a single author
/// into an equivalent, typically shorter, sequence.
///
/// Greedy left fold: each incoming operation either merges into the tail of
/// the result or is appended. No-op operations (zero span) vanish. Applying
/// the composed sequence to a document is equivalent to folding `apply`
/// over the original sequence.
///
/// Merge rules (same kind required):
///
/// - `Insert` runs merge when the second starts exactly where the first
///   ends and both carry the same attributes.
/// - `Delete` runs merge at the same anchor (forward deletion) or when the
///   second ends where the first starts (a backspace chain).
/// - `Style` runs merge when adjacent with identical attributes.
/// - `Retain` runs never merge.
///
/// # Example
///
/// ```
/// use ot_kit::prelude::*;
///
/// // Three keystrokes coalesce into one operation for transmission.
/// let typed = [
///     Operation::insert(0, "a"),
///     Operation::insert(1, "b"),
///     Operation::insert(2, "c"),
/// ];
/// assert_eq!(compose(&typed), [Operation::insert(0, "abc")]);
/// ```
#[must_use]
pub fn compose(ops: &[Operation]) -> Vec<Operation> {
    let mut result: Vec<Operation> = Vec::with_capacity(ops.len());
    for op in ops {
        if op.is_noop() {
            continue;
        }
        if let Some(last) = result.last_mut() {
            if can_compose(last, op) {
                *last = compose_two(last, op);
                continue;
            }
        }
        result.push(op.clone());
    }
    result
}

/// Whether `b` can merge into `a`, where `a` precedes `b` in the causal
/// chain.
fn can_compose(a: &Operation, b: &Operation) -> bool {
    use Operation::{Delete, Insert, Retain, Style};

    match (a, b) {
        (
            Insert {
                position: pa,
                attributes: aa,
                ..
            },
            Insert {
                position: pb,
                attributes: ab,
                ..
            },
        ) => *pb == pa + a.span() && aa == ab,
        (
            Delete { position: pa, .. },
            Delete {
                position: pb,
                length: lb,
            },
        ) => pb == pa || pb + lb == *pa,
        (
            Style {
                position: pa,
                length: la,
                attributes: aa,
            },
            Style {
                position: pb,
                attributes: ab,
                ..
            },
        ) => *pb == pa + la && aa == ab,
        (Retain { .. }, Retain { .. }) => false,
        _ => false,
    }
}

/// Merge `b` into `a`. Callers check [`can_compose`] first.
fn compose_two(a: &Operation, b: &Operation) -> Operation {
    use Operation::{Delete, Insert, Style};

    match (a, b) {
        (
            Insert {
                position,
                content: ca,
                attributes,
            },
            Insert { content: cb, .. },
        ) => {
            let mut content = String::with_capacity(ca.len() + cb.len());
            content.push_str(ca);
            content.push_str(cb);
            Insert {
                position: *position,
                content,
                attributes: attributes.clone(),
            }
        }
        (
            Delete {
                position: pa,
                length: la,
            },
            Delete {
                position: pb,
                length: lb,
            },
        ) => Delete {
            // The backspace chain anchors at the earlier (second) position.
            position: *pa.min(pb),
            length: la + lb,
        },
        (
            Style {
                position,
                length: la,
                attributes,
            },
            Style { length: lb, .. },
        ) => Style {
            position: *position,
            length: la + lb,
            attributes: attributes.clone(),
        },
        _ => unreachable!("compose_two called on a non-composable pair"),
    }
}
