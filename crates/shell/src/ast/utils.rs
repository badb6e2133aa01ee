// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying and analyzing AST nodes.

use super::{AstVisitor, Command, ExprSeq, ExprSubst, FileContent};

impl ExprSeq {
    /// Parse input string into an expression sequence.
    ///
    /// This is a convenience wrapper around [`Parser::parse`].
    ///
    /// [`Parser::parse`]: crate::Parser::parse
    pub fn parse(input: &str) -> Result<Self, crate::ParseError> {
        crate::Parser::parse(input)
    }

    /// Command names in source order, including those inside
    /// substitutions.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use acme_shell::Parser;
    ///
    /// let ast = Parser::parse("enumerate [a.py] | grep (print x) && ping")?;
    /// assert_eq!(ast.command_names(), vec!["enumerate", "grep", "print", "ping"]);
    /// # Ok::<(), acme_shell::ParseError>(())
    /// ```
    pub fn command_names(&self) -> Vec<&str> {
        struct Collector<'a>(Vec<&'a str>);
        impl<'a> Collector<'a> {
            fn collect(&mut self, seq: &'a ExprSeq) {
                for comp in &seq.comps {
                    match &comp.head {
                        super::Expr::Command(c) => self.command(c),
                        super::Expr::Subst(s) => self.collect(&s.body),
                        _ => {}
                    }
                    for stage in &comp.stages {
                        self.command(stage);
                    }
                }
            }

            fn command(&mut self, cmd: &'a Command) {
                self.0.push(&cmd.name);
                for arg in &cmd.args {
                    if let super::Argument::Subst(s) = arg {
                        self.collect(&s.body);
                    }
                }
            }
        }
        let mut collector = Collector(Vec::new());
        collector.collect(self);
        collector.0
    }

    /// Count every command invocation in the tree.
    pub fn count_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_command(&mut self, cmd: &Command) {
                self.0 += 1;
                self.walk_command(cmd);
            }
        }
        let mut counter = Counter(0);
        counter.visit_expr_seq(self);
        counter.0
    }

    /// File names referenced with `[...]`, de-duplicated in order of
    /// appearance.
    pub fn file_references(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl AstVisitor for Collector {
            fn visit_file_content(&mut self, file: &FileContent) {
                if !self.0.contains(&file.file_name) {
                    self.0.push(file.file_name.clone());
                }
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_expr_seq(self);
        collector.0
    }

    /// Deepest substitution nesting. `0` means no substitutions.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use acme_shell::Parser;
    ///
    /// assert_eq!(Parser::parse("ping")?.max_substitution_depth(), 0);
    /// assert_eq!(Parser::parse("concat (concat (ping))")?.max_substitution_depth(), 2);
    /// # Ok::<(), acme_shell::ParseError>(())
    /// ```
    pub fn max_substitution_depth(&self) -> usize {
        struct DepthTracker {
            current: usize,
            max: usize,
        }
        impl AstVisitor for DepthTracker {
            fn visit_subst(&mut self, subst: &ExprSubst) {
                self.current += 1;
                self.max = self.max.max(self.current);
                self.walk_subst(subst);
                self.current -= 1;
            }
        }
        let mut tracker = DepthTracker { current: 0, max: 0 };
        tracker.visit_expr_seq(self);
        tracker.max
    }
}
