//! WebAssembly bindings for ot-kit.
//!
//! Enable with the `wasm` feature:
//!
//! ```toml
//! [dependencies]
//! ot-kit = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! The engine's entry points are exposed as plain functions and
//! `Operation` as a JavaScript class, so a browser editor can construct
//! operations locally, compose typing bursts, and rebase remote edits.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::operation::{AttrValue, Attributes};

// ── Operation ───────────────────────────────────────────────────────

/// An immutable edit operation for use from JavaScript.
#[wasm_bindgen(js_name = Operation)]
pub struct WasmOperation {
    inner: crate::Operation,
}

#[wasm_bindgen(js_class = Operation)]
impl WasmOperation {
    /// Create a text insertion at a character position.
    pub fn insert(position: usize, content: &str) -> WasmOperation {
        Self {
            inner: crate::Operation::insert(position, content),
        }
    }

    /// Create a styled text insertion. `attributes` is a plain object of
    /// string, boolean, or integral number values.
    #[wasm_bindgen(js_name = insertStyled)]
    pub fn insert_styled(position: usize, content: &str, attributes: &JsValue) -> WasmOperation {
        Self {
            inner: crate::Operation::insert_styled(position, content, attrs_from_js(attributes)),
        }
    }

    /// Create a deletion of `length` characters.
    pub fn delete(position: usize, length: usize) -> WasmOperation {
        Self {
            inner: crate::Operation::delete(position, length),
        }
    }

    /// Create a retain over `length` characters.
    pub fn retain(position: usize, length: usize) -> WasmOperation {
        Self {
            inner: crate::Operation::retain(position, length),
        }
    }

    /// Create a style run. `attributes` is a plain object of string,
    /// boolean, or integral number values.
    pub fn style(position: usize, length: usize, attributes: &JsValue) -> WasmOperation {
        Self {
            inner: crate::Operation::style(position, length, attrs_from_js(attributes)),
        }
    }

    /// The operation's kind name: `"Insert"`, `"Delete"`, `"Retain"`, or
    /// `"Style"`.
    pub fn kind(&self) -> String {
        self.inner.kind().to_string()
    }

    /// The character offset this operation addresses.
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// The number of characters this operation covers.
    pub fn span(&self) -> usize {
        self.inner.span()
    }

    /// Whether this operation has no effect.
    #[wasm_bindgen(js_name = isNoop)]
    pub fn is_noop(&self) -> bool {
        self.inner.is_noop()
    }

    /// A readable description of the operation.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

impl WasmOperation {
    fn wrap(inner: crate::Operation) -> WasmOperation {
        Self { inner }
    }
}

// ── Engine functions ────────────────────────────────────────────────

/// Apply an operation to a document, returning the new text.
///
/// Throws when the operation falls outside the document bounds.
#[wasm_bindgen(js_name = apply)]
pub fn apply_js(text: &str, op: &WasmOperation) -> Result<String, JsValue> {
    crate::apply(text, &op.inner).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Rebase two concurrent operations, returning `[a2, b2]`.
#[wasm_bindgen(js_name = transform)]
pub fn transform_js(a: &WasmOperation, b: &WasmOperation) -> Vec<WasmOperation> {
    let (a2, b2) = crate::transform(&a.inner, &b.inner);
    let mut pair = Vec::with_capacity(2);
    pair.push(WasmOperation::wrap(a2));
    pair.push(WasmOperation::wrap(b2));
    pair
}

/// Coalesce a causal chain of operations into an equivalent shorter one.
#[wasm_bindgen(js_name = composeAll)]
pub fn compose_js(ops: Vec<WasmOperation>) -> Vec<WasmOperation> {
    let inner: Vec<crate::Operation> = ops.into_iter().map(|op| op.inner).collect();
    crate::compose(&inner)
        .into_iter()
        .map(WasmOperation::wrap)
        .collect()
}

/// Convert a plain JS object into an attribute map, keeping string,
/// boolean, and integral number values and skipping everything else.
fn attrs_from_js(value: &JsValue) -> Attributes {
    let mut attrs = Attributes::new();
    if let Some(object) = value.dyn_ref::<js_sys::Object>() {
        for entry in js_sys::Object::entries(object).iter() {
            let pair = js_sys::Array::from(&entry);
            let Some(key) = pair.get(0).as_string() else {
                continue;
            };
            let raw = pair.get(1);
            let parsed = if let Some(flag) = raw.as_bool() {
                Some(AttrValue::Bool(flag))
            } else if let Some(number) = raw.as_f64() {
                Some(AttrValue::Int(number as i64))
            } else {
                raw.as_string().map(AttrValue::Str)
            };
            if let Some(parsed) = parsed {
                attrs.insert(key, parsed);
            }
        }
    }
    attrs
}
