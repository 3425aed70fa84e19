//! Validation
//!
//! Clean separation of padding analysis from parsing and CLI concerns.

pub mod engine;
pub mod padding;
pub mod walk;

pub use engine::{validate_document, Diagnostic, PaddingRule, Severity, ValidationResult};
pub use padding::{is_bottom_padded, is_top_padded, BlockLike};
pub use walk::{walk, Visitor};
