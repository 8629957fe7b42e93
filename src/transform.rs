//! The conflict-resolution core: rebasing concurrent operations.
//!
//! [`transform`] takes two operations generated against the *same* base
//! document snapshot and adjusts them so that both application orders
//! converge — the TP1 property every replica relies on:
//!
//! ```text
//! apply(apply(doc, a), b') == apply(apply(doc, b), a')
//!     where (a', b') = transform(a, b)
//! ```
//!
//! Maintaining that precondition (a shared base version for every pair) is
//! the caller's causality bookkeeping; the engine does not check it.
//!
//! # Example
//!
//! ```
//! use ot_kit::prelude::*;
//!
//! // Two authors edit "hello" concurrently.
//! let a = Operation::insert(5, " world");
//! let b = Operation::insert(0, "say ");
//! let (a2, b2) = transform(&a, &b);
//!
//! let left = apply(&apply("hello", &a)?, &b2)?;
//! let right = apply(&apply("hello", &b)?, &a2)?;
//! assert_eq!(left, right);
//! assert_eq!(left, "say hello world");
//! # Ok::<(), ot_kit::OtError>(())
//! ```

use crate::operation::Operation;

/// Transform a pair of concurrent operations into their rebased forms.
///
/// Total over every kind pair; never fails for structurally valid inputs.
/// Inputs are untouched — both results are fresh values. If either side is
/// a no-op (zero span), both pass through unchanged.
///
/// Tie-breaks are part of the contract:
///
/// - Two inserts at the same position order by lexicographic content
///   comparison, giving a deterministic total order regardless of which
///   argument is which.
/// - Overlapping deletes collapse to the shared minimum start, each length
///   reduced by the overlap, so the union range is deleted exactly once.
/// - Style pairs merge attributes only over identical ranges (right-hand
///   keys win); any other overlap passes through untouched rather than
///   guessing and silently dropping attributes.
#[must_use]
pub fn transform(a: &Operation, b: &Operation) -> (Operation, Operation) {
    use Operation::{Delete, Insert, Retain, Style};

    // Zero-span operations are transform-stable by contract.
    if a.is_noop() || b.is_noop() {
        return (a.clone(), b.clone());
    }

    match (a, b) {
        (
            Insert {
                position: pa,
                content: ca,
                ..
            },
            Insert {
                position: pb,
                content: cb,
                ..
            },
        ) => {
            if pa < pb || (pa == pb && ca < cb) {
                (a.clone(), at_position(b, pb + a.span()))
            } else {
                (at_position(a, pa + b.span()), b.clone())
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
        ) => {
            let end_a = pa + la;
            let end_b = pb + lb;
            if end_a <= *pb {
                // Disjoint, a first: b slides left past the removed range.
                (a.clone(), Operation::delete(pb - la, *lb))
            } else if end_b <= *pa {
                (Operation::delete(pa - lb, *la), b.clone())
            } else {
                // Overlapping: each side keeps only its non-shared remainder,
                // anchored at the shared start, so the union is deleted once.
                let overlap = end_a.min(end_b) - (*pa).max(*pb);
                let start = (*pa).min(*pb);
                (
                    Operation::delete(start, la - overlap),
                    Operation::delete(start, lb - overlap),
                )
            }
        }

        (Insert { .. }, Delete { .. }) => {
            let (insert, delete) = transform_insert_delete(a, b);
            (insert, delete)
        }
        (Delete { .. }, Insert { .. }) => {
            let (insert, delete) = transform_insert_delete(b, a);
            (delete, insert)
        }

        (
            Style {
                position: pa,
                length: la,
                attributes: aa,
            },
            Style {
                position: pb,
                length: lb,
                attributes: ab,
            },
        ) => {
            if pa == pb && la == lb {
                // Identical range: merge, right-hand operand wins conflicts.
                let mut merged = aa.clone();
                for (key, value) in ab {
                    merged.insert(key.clone(), value.clone());
                }
                (
                    Operation::style(*pa, *la, merged.clone()),
                    Operation::style(*pb, *lb, merged),
                )
            } else {
                (a.clone(), b.clone())
            }
        }

        // Length-preserving kinds neither shift text-affecting operations
        // nor are shifted by them.
        (Retain { .. } | Style { .. }, _) | (_, Retain { .. } | Style { .. }) => {
            (a.clone(), b.clone())
        }
    }
}

/// Transform an insert against a concurrent delete, returning the pair in
/// `(insert', delete')` order.
fn transform_insert_delete(insert: &Operation, delete: &Operation) -> (Operation, Operation) {
    let i_pos = insert.position();
    let d_pos = delete.position();
    let d_len = delete.span();

    if i_pos <= d_pos {
        // Insert at or before the range start: the delete slides right.
        (insert.clone(), at_position(delete, d_pos + insert.span()))
    } else if i_pos >= d_pos + d_len {
        // Insert past the range end: the insert slides left.
        (at_position(insert, i_pos - d_len), delete.clone())
    } else {
        // Insert inside the deleted range: pin it to the range start so the
        // inserted content survives rather than vanishing with the range.
        (at_position(insert, d_pos), delete.clone())
    }
}

/// Copy of `op` addressed at a different position.
fn at_position(op: &Operation, position: usize) -> Operation {
    let mut moved = op.clone();
    match &mut moved {
        Operation::Insert { position: p, .. }
        | Operation::Delete { position: p, .. }
        | Operation::Retain { position: p, .. }
        | Operation::Style { position: p, .. } => *p = position,
    }
    moved
}
