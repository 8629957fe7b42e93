use alloc::collections::BTreeMap;
use alloc::string::String;

/// Style attributes attached to an operation, keyed by attribute name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single style attribute value.
///
/// Numeric values are integral (font weights, heading levels, indent depths).
/// Fractional values must be encoded as strings by the rich-text layer so
/// that attribute maps stay comparable for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrValue {
    /// A boolean flag, e.g. `bold: true`.
    Bool(bool),
    /// An integral number, e.g. `heading: 2`.
    Int(i64),
    /// A string value, e.g. `color: "#aa3322"`.
    Str(String),
}

/// An immutable description of one atomic edit against a base document.
///
/// `position` is always a zero-based **character** offset into the document
/// as it existed before the operation. The span of an `Insert` is the
/// character count of its content; every other kind carries an explicit
/// `length`. Zero-span operations are valid no-ops: they pass through
/// [`transform`](crate::transform) untouched and [`compose`](crate::compose)
/// drops them.
///
/// Operations are never mutated once built — the engine functions take
/// references and return new values.
///
/// # Example
///
/// ```
/// use ot_kit::prelude::*;
///
/// let op = Operation::insert(5, " world");
/// assert_eq!(op.position(), 5);
/// assert_eq!(op.span(), 6);
///
/// let text = apply("hello", &op)?;
/// assert_eq!(text, "hello world");
/// # Ok::<(), ot_kit::OtError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Insert `content` at `position`. May carry attributes for styled
    /// insertion.
    Insert {
        /// Character offset of the insertion point.
        position: usize,
        /// The literal text inserted.
        content: String,
        /// Style attributes for the inserted text (often empty).
        attributes: Attributes,
    },
    /// Delete `length` characters starting at `position`.
    Delete {
        /// Character offset of the first deleted character.
        position: usize,
        /// Number of characters removed.
        length: usize,
    },
    /// Skip over `length` characters without modifying them.
    Retain {
        /// Character offset where the retained run starts.
        position: usize,
        /// Number of characters retained.
        length: usize,
        /// Attributes carried through untouched for the rich-text layer.
        attributes: Attributes,
    },
    /// Apply style attributes to `length` characters starting at `position`.
    Style {
        /// Character offset where the styled run starts.
        position: usize,
        /// Number of characters styled.
        length: usize,
        /// The attributes to apply.
        attributes: Attributes,
    },
}

impl Operation {
    /// Create a plain text insertion.
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self::Insert {
            position,
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a styled text insertion.
    pub fn insert_styled(
        position: usize,
        content: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self::Insert {
            position,
            content: content.into(),
            attributes,
        }
    }

    /// Create a deletion of `length` characters.
    pub fn delete(position: usize, length: usize) -> Self {
        Self::Delete { position, length }
    }

    /// Create a retain over `length` characters.
    pub fn retain(position: usize, length: usize) -> Self {
        Self::Retain {
            position,
            length,
            attributes: Attributes::new(),
        }
    }

    /// Create a retain that carries attributes for the rich-text layer.
    pub fn retain_styled(position: usize, length: usize, attributes: Attributes) -> Self {
        Self::Retain {
            position,
            length,
            attributes,
        }
    }

    /// Create a style run over `length` characters.
    pub fn style(position: usize, length: usize, attributes: Attributes) -> Self {
        Self::Style {
            position,
            length,
            attributes,
        }
    }

    /// The character offset this operation addresses in its base document.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Insert { position, .. }
            | Self::Delete { position, .. }
            | Self::Retain { position, .. }
            | Self::Style { position, .. } => *position,
        }
    }

    /// The number of characters this operation covers.
    ///
    /// For `Insert` this is the character count of the content; for every
    /// other kind it is the explicit length field.
    #[must_use]
    pub fn span(&self) -> usize {
        match self {
            Self::Insert { content, .. } => content.chars().count(),
            Self::Delete { length, .. }
            | Self::Retain { length, .. }
            | Self::Style { length, .. } => *length,
        }
    }

    /// The attributes carried by this operation, if its kind carries any.
    ///
    /// `Delete` never carries attributes and returns `None`.
    #[must_use]
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Insert { attributes, .. }
            | Self::Retain { attributes, .. }
            | Self::Style { attributes, .. } => Some(attributes),
            Self::Delete { .. } => None,
        }
    }

    /// Whether this operation has no effect (zero span).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.span() == 0
    }

    /// The name of this operation's kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "Insert",
            Self::Delete { .. } => "Delete",
            Self::Retain { .. } => "Retain",
            Self::Style { .. } => "Style",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Insert {
                position, content, ..
            } => write!(f, "Insert({position}, {content:?})"),
            Self::Delete { position, length } => write!(f, "Delete({position}, {length})"),
            Self::Retain {
                position, length, ..
            } => write!(f, "Retain({position}, {length})"),
            Self::Style {
                position,
                length,
                attributes,
            } => write!(f, "Style({position}, {length}, {} attrs)", attributes.len()),
        }
    }
}
