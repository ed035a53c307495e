//! `Reference` for the l-value nodes.

use crate::node::{AssignmentExpression, Expression, IdentifierExpression};
use esc_types::{EsValue, Number, Reference};

/// The base of an assignment is guessed from the literal kind of its
/// right-hand side. This stands in for a real evaluator: anything that is
/// not a string or numeric literal gives Undefined.
impl Reference for AssignmentExpression {
    fn base(&self) -> EsValue {
        let Some(rhs) = self.rhs.as_deref() else {
            return EsValue::Undefined;
        };
        match rhs {
            Expression::StringLiteral(s) => EsValue::string(s.value.clone()),
            Expression::IntegerLiteral(i) => EsValue::Number(Number::from(i.value)),
            Expression::FloatLiteral(f) => EsValue::number(f.value),
            Expression::Identifier(_)
            | Expression::Assignment(_)
            | Expression::ObjectLiteral(_)
            | Expression::PropertyDefinition(_)
            | Expression::LiteralPropertyName(_)
            | Expression::ComputedPropertyName(_)
            | Expression::Arguments(_)
            | Expression::Call(_)
            | Expression::Binary(_) => EsValue::Undefined,
        }
    }

    fn referenced_name(&self) -> Option<&str> {
        match self.lhs.as_deref() {
            Some(Expression::Identifier(id)) => Some(&id.name),
            _ => None,
        }
    }
}

/// A bound identifier answers through its binding. Unbound, it is an
/// unresolvable reference to its own name.
impl Reference for IdentifierExpression {
    fn base(&self) -> EsValue {
        self.binding()
            .map(|binding| binding.base())
            .unwrap_or(EsValue::Undefined)
    }

    fn referenced_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
