//! Padding Rule Engine
//!
//! Applies the configured padding policy to every block-like node in a
//! parsed program and collects diagnostics. The engine is stateless
//! across nodes apart from the policy fixed at construction.

use serde::Serialize;

use crate::config::Policy;
use crate::parser::ast::{Block, Program, Switch};
use crate::parser::stream::TokenStream;
use crate::validation::padding::{is_bottom_padded, is_top_padded, BlockLike};
use crate::validation::walk::{walk, Visitor};

/// Message reported when a required blank line is missing
pub const ALWAYS_MESSAGE: &str = "Block must be padded by blank lines.";
/// Message reported when a forbidden blank line is present
pub const NEVER_MESSAGE: &str = "Block must not be padded by blank lines.";

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic for one violated block edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    /// 0-based source column
    pub col: usize,
    pub severity: Severity,
    pub message: String,
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, line: usize, col: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            col,
            severity: Severity::Warning,
            message,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The padding rule: one immutable policy, applied per node
#[derive(Debug, Clone, Copy)]
pub struct PaddingRule {
    policy: Policy,
}

impl PaddingRule {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Check every block-like node in the program
    pub fn check_program(&self, program: &Program, stream: &TokenStream) -> ValidationResult {
        let mut visitor = RuleVisitor {
            rule: self,
            stream,
            result: ValidationResult::new(),
        };
        walk(program, &mut visitor);
        visitor.result
    }

    /// Check one node: zero, one, or two diagnostics (top and bottom
    /// edges independently). Empty bodies are never analyzed.
    fn check_node(&self, node: BlockLike<'_>, stream: &TokenStream, result: &mut ValidationResult) {
        if node.is_empty() {
            return;
        }

        let top = is_top_padded(node, stream);
        let bottom = is_bottom_padded(node, stream);

        let (flag_top, flag_bottom, message) = match self.policy {
            Policy::Always => (!top, !bottom, ALWAYS_MESSAGE),
            Policy::Never => (top, bottom, NEVER_MESSAGE),
        };

        if flag_top {
            let span = stream.get(node.start_token()).span;
            result.add_warning(span.start_line, span.start_col, message.to_string());
        }
        if flag_bottom {
            let span = stream.get(node.last_token()).span;
            result.add_warning(span.end_line, span.end_col - 1, message.to_string());
        }
    }
}

struct RuleVisitor<'a> {
    rule: &'a PaddingRule,
    stream: &'a TokenStream,
    result: ValidationResult,
}

impl Visitor for RuleVisitor<'_> {
    fn visit_block(&mut self, block: &Block) {
        self.rule
            .check_node(BlockLike::Block(block), self.stream, &mut self.result);
    }

    fn visit_switch(&mut self, switch: &Switch) {
        self.rule
            .check_node(BlockLike::Switch(switch), self.stream, &mut self.result);
    }
}

/// Validate an entire document against the given padding policy
///
/// This is the library's main entry point: lex, parse, and walk the
/// program with the padding rule.
pub fn validate_document(content: &str, policy: Policy) -> ValidationResult {
    let (stream, program) = crate::parser::parse_source(content);
    PaddingRule::new(policy).check_program(&program, &stream)
}
