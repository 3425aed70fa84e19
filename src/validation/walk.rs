//! Tree Traversal
//!
//! Walks a parsed program and hands every block-like node to a visitor,
//! serially and exactly once per node. The visitor holds no reference
//! back to the walker.

use crate::parser::ast::{Block, Program, Stmt, Switch};

/// Per-node-type callbacks invoked during traversal
pub trait Visitor {
    fn visit_block(&mut self, block: &Block);
    fn visit_switch(&mut self, switch: &Switch);
}

/// Visit every statement block and switch construct in the program,
/// including those nested in block bodies and case clauses
pub fn walk(program: &Program, visitor: &mut impl Visitor) {
    for stmt in &program.stmts {
        walk_stmt(stmt, visitor);
    }
}

fn walk_stmt(stmt: &Stmt, visitor: &mut impl Visitor) {
    match stmt {
        Stmt::Block(block) => {
            visitor.visit_block(block);
            for inner in &block.stmts {
                walk_stmt(inner, visitor);
            }
        }
        Stmt::Switch(switch) => {
            visitor.visit_switch(switch);
            for case in &switch.cases {
                for inner in &case.stmts {
                    walk_stmt(inner, visitor);
                }
            }
        }
        Stmt::Simple(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[derive(Default)]
    struct Counter {
        blocks: usize,
        switches: usize,
    }

    impl Visitor for Counter {
        fn visit_block(&mut self, _: &Block) {
            self.blocks += 1;
        }

        fn visit_switch(&mut self, _: &Switch) {
            self.switches += 1;
        }
    }

    #[test]
    fn test_walk_visits_nested_blocks() {
        let (_, program) = parse_source("{ { foo(); } { } }");
        let mut counter = Counter::default();
        walk(&program, &mut counter);

        assert_eq!(counter.blocks, 3);
        assert_eq!(counter.switches, 0);
    }

    #[test]
    fn test_walk_visits_blocks_inside_case_bodies() {
        let (_, program) = parse_source("switch (x) { case 1: { foo(); } }");
        let mut counter = Counter::default();
        walk(&program, &mut counter);

        assert_eq!(counter.blocks, 1);
        assert_eq!(counter.switches, 1);
    }

    #[test]
    fn test_walk_empty_program() {
        let (_, program) = parse_source("foo();");
        let mut counter = Counter::default();
        walk(&program, &mut counter);

        assert_eq!(counter.blocks, 0);
        assert_eq!(counter.switches, 0);
    }
}
