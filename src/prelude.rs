//! Convenient re-exports for common usage.
//!
//! ```
//! use ot_kit::prelude::*;
//! ```

pub use crate::apply;
pub use crate::compose;
pub use crate::transform;
pub use crate::AttrValue;
pub use crate::Attributes;
pub use crate::Operation;
pub use crate::OtError;
