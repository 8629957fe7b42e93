//! # ot-kit
//!
//! An operational transform (OT) engine for real-time collaborative text
//! editing.
//!
//! OT resolves concurrent, causally-unordered edits from multiple authors
//! into a single convergent document by algebraically adjusting operation
//! offsets, without a central lock and without diffing full documents. This
//! crate is the pure conflict-resolution core: transport, persistence,
//! presence, and causality bookkeeping belong to the surrounding document
//! session.
//!
//! The public contract is one value type and three pure functions:
//!
//! - [`Operation`] - an immutable edit: `Insert`, `Delete`, `Retain`, or
//!   `Style`
//! - [`apply`] - map `(text, operation)` to the new text
//! - [`transform`] - rebase two concurrent operations so both application
//!   orders converge (the TP1 property)
//! - [`compose`] - coalesce a causal chain of operations (e.g. a typing
//!   burst) into fewer equivalent operations before transmission
//!
//! ## `no_std` Support
//!
//! This crate supports `no_std` environments with the `alloc` crate.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ot-kit = { version = "0.1", default-features = false }
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ot_kit::prelude::*;
//!
//! // Two authors edit the same base text concurrently.
//! let alice = Operation::insert(5, " world");
//! let bob = Operation::delete(0, 1);
//!
//! let (alice2, bob2) = transform(&alice, &bob);
//!
//! // Whichever edit lands first, the replicas converge.
//! let via_alice = apply(&apply("hello", &alice)?, &bob2)?;
//! let via_bob = apply(&apply("hello", &bob)?, &alice2)?;
//! assert_eq!(via_alice, via_bob);
//! assert_eq!(via_alice, "ello world");
//! # Ok::<(), ot_kit::OtError>(())
//! ```
//!
//! ## Engine properties
//!
//! All three functions are synchronous, deterministic, and free of side
//! effects or shared state; [`transform`] and [`compose`] are total, and
//! [`apply`] fails only with [`OtError::InvalidOperation`] when an
//! operation falls outside the document bounds.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod apply;
mod compose;
mod error;
mod operation;
mod transform;
#[cfg(feature = "wasm")]
mod wasm;

pub mod prelude;

pub use apply::apply;
pub use compose::compose;
pub use error::OtError;
pub use operation::{AttrValue, Attributes, Operation};
pub use transform::transform;
