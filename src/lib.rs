//! padcheck
//!
//! A blank-line padding lint for brace-delimited blocks and switch
//! constructs.
//!
//! This library provides:
//! - Position-tracking tokenization with comments in-stream
//! - Block-structure parsing and traversal
//! - Padding analysis and policy-driven diagnostics
//! - Configuration management

pub mod config;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, Policy};
pub use parser::{parse_source, Program, TokenStream};
pub use validation::{validate_document, Diagnostic, ValidationResult};
