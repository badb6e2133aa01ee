// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the AST.

use super::{
    Argument, BoolLiteral, Command, Expr, ExprComp, ExprSeq, ExprSubst, FileContent, IntLiteral,
    StrLiteral,
};

/// Visitor trait for traversing the AST.
///
/// Default implementations walk the entire tree. Each `visit_*` method has a
/// corresponding `walk_*` method; override `visit_*` and call `walk_*` to
/// descend, or skip the call to prune the subtree.
///
/// # Example: Find Command Names
///
/// ```ignore
/// use acme_shell::{AstVisitor, Command, Parser};
///
/// struct CommandFinder(Vec<String>);
///
/// impl AstVisitor for CommandFinder {
///     fn visit_command(&mut self, cmd: &Command) {
///         self.0.push(cmd.name.clone());
///         self.walk_command(cmd);
///     }
/// }
///
/// let ast = Parser::parse("concat (print a) | count")?;
/// let mut finder = CommandFinder(Vec::new());
/// finder.visit_expr_seq(&ast);
/// assert_eq!(finder.0, vec!["concat", "print", "count"]);
/// # Ok::<(), acme_shell::ParseError>(())
/// ```
pub trait AstVisitor {
    fn visit_expr_seq(&mut self, seq: &ExprSeq) {
        self.walk_expr_seq(seq);
    }

    fn visit_expr_comp(&mut self, comp: &ExprComp) {
        self.walk_expr_comp(comp);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.walk_expr(expr);
    }

    fn visit_command(&mut self, cmd: &Command) {
        self.walk_command(cmd);
    }

    fn visit_argument(&mut self, arg: &Argument) {
        self.walk_argument(arg);
    }

    fn visit_subst(&mut self, subst: &ExprSubst) {
        self.walk_subst(subst);
    }

    // Leaves

    fn visit_file_content(&mut self, _file: &FileContent) {}

    fn visit_str_literal(&mut self, _lit: &StrLiteral) {}

    fn visit_int_literal(&mut self, _lit: &IntLiteral) {}

    fn visit_bool_literal(&mut self, _lit: &BoolLiteral) {}

    // Default walk implementations

    /// Walk a sequence, visiting each composition in order.
    fn walk_expr_seq(&mut self, seq: &ExprSeq) {
        for comp in &seq.comps {
            self.visit_expr_comp(comp);
        }
    }

    /// Walk a composition: the head, then each piped stage.
    fn walk_expr_comp(&mut self, comp: &ExprComp) {
        self.visit_expr(&comp.head);
        for stage in &comp.stages {
            self.visit_command(stage);
        }
    }

    fn walk_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Command(c) => self.visit_command(c),
            Expr::FileContent(f) => self.visit_file_content(f),
            Expr::Subst(s) => self.visit_subst(s),
            Expr::Str(s) => self.visit_str_literal(s),
        }
    }

    fn walk_command(&mut self, cmd: &Command) {
        for arg in &cmd.args {
            self.visit_argument(arg);
        }
    }

    fn walk_argument(&mut self, arg: &Argument) {
        match arg {
            Argument::Int(i) => self.visit_int_literal(i),
            Argument::Bool(b) => self.visit_bool_literal(b),
            Argument::FileContent(f) => self.visit_file_content(f),
            Argument::Subst(s) => self.visit_subst(s),
            Argument::Str(s) => self.visit_str_literal(s),
        }
    }

    fn walk_subst(&mut self, subst: &ExprSubst) {
        self.visit_expr_seq(&subst.body);
    }
}
