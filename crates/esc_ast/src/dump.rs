//! Indented tree dump for debugging and tests.
//!
//! One node per line, children indented one level deeper than their parent.
//! Labelled children (`lhs`, `Key`, ...) get a label line of their own, and
//! an absent child prints as `[UNDEFINED]`.

use crate::node::*;

const INDENT: &str = "  ";

impl Expression {
    /// Render this tree as indented text.
    pub fn dump(&self) -> String {
        let mut dumper = TreeDumper::new();
        dumper.dump_expression(self);
        dumper.finish()
    }
}

/// Writes the dump of one tree into a string buffer.
pub struct TreeDumper {
    output: String,
    indent_level: usize,
}

impl TreeDumper {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(256),
            indent_level: 0,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent_level += 1;
        f(self);
        self.indent_level -= 1;
    }

    fn labelled(&mut self, label: &str, child: Option<&Expression>) {
        self.line(label);
        self.nested(|d| d.optional(child));
    }

    fn optional(&mut self, child: Option<&Expression>) {
        match child {
            Some(expr) => self.dump_expression(expr),
            None => self.line("[UNDEFINED]"),
        }
    }

    pub fn dump_expression(&mut self, expr: &Expression) {
        let name = expr.kind().name();
        match expr {
            Expression::IntegerLiteral(n) => self.line(&format!("{}: {}", name, n.value)),
            Expression::FloatLiteral(n) => self.line(&format!("{}: {}", name, n.value)),
            Expression::StringLiteral(s) => self.line(&format!("{}: {}", name, s.value)),
            Expression::Identifier(id) => self.line(&format!("{}: {}", name, id.name)),
            Expression::Assignment(a) => self.dump_assignment(a),
            Expression::ObjectLiteral(o) => {
                self.line(name);
                if let Some(properties) = &o.properties {
                    self.nested(|d| {
                        for property in properties {
                            d.dump_property_definition(property);
                        }
                    });
                }
            }
            Expression::PropertyDefinition(p) => self.dump_property_definition(p),
            Expression::LiteralPropertyName(p) => {
                self.line(name);
                self.nested(|d| d.optional(p.inner.as_deref()));
            }
            Expression::ComputedPropertyName(p) => {
                self.line(name);
                self.nested(|d| d.optional(p.inner.as_deref()));
            }
            Expression::Arguments(args) => self.dump_arguments(args),
            Expression::Call(call) => {
                self.line(name);
                self.nested(|d| {
                    d.labelled("callee", Some(call.callee.as_ref()));
                    if let Some(args) = &call.arguments {
                        d.dump_arguments(args);
                    }
                });
            }
            Expression::Binary(b) => {
                self.line(&format!("{}: {}", name, b.operator.as_char()));
                self.nested(|d| {
                    d.labelled("lhs", b.lhs.as_deref());
                    d.labelled("rhs", b.rhs.as_deref());
                });
            }
        }
    }

    fn dump_assignment(&mut self, a: &AssignmentExpression) {
        self.line(ExpressionKind::Assignment.name());
        self.nested(|d| {
            d.labelled("lhs", a.lhs.as_deref());
            d.labelled("rhs", a.rhs.as_deref());
        });
    }

    fn dump_property_definition(&mut self, p: &PropertyDefinition) {
        self.line(ExpressionKind::PropertyDefinition.name());
        self.nested(|d| {
            d.labelled("Key", p.key.as_deref());
            d.labelled("Value", p.value.as_deref());
        });
    }

    fn dump_arguments(&mut self, args: &Arguments) {
        self.line(ExpressionKind::Arguments.name());
        self.nested(|d| {
            for arg in &args.list {
                d.dump_assignment(arg);
            }
        });
    }
}

impl Default for TreeDumper {
    fn default() -> Self {
        Self::new()
    }
}
