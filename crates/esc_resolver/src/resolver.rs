//! The name resolution pass.
//!
//! Post-order walk: a node succeeds only once its children have. Handles:
//! - Literals (always succeed)
//! - Identifier lookup and binding
//! - First-use binding of assignment targets
//! - Object literals, visiting every property even after a failure
//! - Calls (callee only; arguments are not resolved yet)
//! - Binary operands

use crate::scope::LexicalScope;
use esc_ast::node::*;
use esc_diagnostics::{messages, DiagnosticCollection};
use esc_types::ReferenceRecord;
use tracing::{trace, warn};

/// Resolves the names of expression trees against one scope.
pub struct NameResolver<'s, S: LexicalScope + ?Sized> {
    scope: &'s mut S,
    diagnostics: DiagnosticCollection,
}

impl<'s, S: LexicalScope + ?Sized> NameResolver<'s, S> {
    pub fn new(scope: &'s mut S) -> Self {
        Self {
            scope,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take diagnostics from the resolver.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Resolve `expr` and everything below it. Returns whether every name
    /// resolved and every required child was present.
    pub fn resolve_expression(&mut self, expr: &mut Expression) -> bool {
        match expr {
            Expression::IntegerLiteral(_)
            | Expression::FloatLiteral(_)
            | Expression::StringLiteral(_) => true,
            Expression::Identifier(id) => self.resolve_identifier(id),
            Expression::Assignment(node) => self.resolve_assignment(node),
            Expression::ObjectLiteral(node) => self.resolve_object_literal(node),
            Expression::PropertyDefinition(node) => self.resolve_property_definition(node),
            Expression::LiteralPropertyName(node) => {
                self.resolve_required(ExpressionKind::LiteralPropertyName, node.inner.as_deref_mut())
            }
            Expression::ComputedPropertyName(node) => {
                self.resolve_required(ExpressionKind::ComputedPropertyName, node.inner.as_deref_mut())
            }
            Expression::Arguments(node) => self.resolve_arguments(node),
            Expression::Call(node) => self.resolve_call(node),
            Expression::Binary(node) => self.resolve_binary(node),
        }
    }

    /// Resolve a child of a `parent` node that must be present.
    fn resolve_required(&mut self, parent: ExpressionKind, child: Option<&mut Expression>) -> bool {
        match child {
            Some(expr) => self.resolve_expression(expr),
            None => {
                self.diagnostics
                    .report(parent.name(), &messages::EXPRESSION_EXPECTED, &[]);
                false
            }
        }
    }

    // ========================================================================
    // Identifiers and assignments
    // ========================================================================

    fn resolve_identifier(&mut self, id: &mut IdentifierExpression) -> bool {
        match self.scope.resolve(&id.name) {
            Some(reference) => {
                let reference = reference.clone();
                if !id.bind(reference) {
                    trace!(name = %id.name, "identifier already bound, keeping first binding");
                }
                true
            }
            None => {
                warn!(name = %id.name, "unresolved identifier");
                self.diagnostics.report(
                    ExpressionKind::Identifier.name(),
                    &messages::CANNOT_FIND_NAME_0,
                    &[id.name.as_str()],
                );
                false
            }
        }
    }

    fn resolve_assignment(&mut self, node: &mut AssignmentExpression) -> bool {
        if node.lhs.is_none() || node.rhs.is_none() {
            self.diagnostics
                .report(ExpressionKind::Assignment.name(), &messages::EXPRESSION_EXPECTED, &[]);
            return false;
        }

        let declared = self.bind_assignment_target(node);
        let lhs_ok = self.resolve_required(ExpressionKind::Assignment, node.lhs.as_deref_mut());
        let rhs_ok = self.resolve_required(ExpressionKind::Assignment, node.rhs.as_deref_mut());
        declared && lhs_ok && rhs_ok
    }

    /// Assignment performs first-use binding: the target name is entered
    /// into the scope, bound to the assignment itself, before either side is
    /// resolved. Assigning the same name again rebinds it.
    fn bind_assignment_target(&mut self, node: &AssignmentExpression) -> bool {
        match ReferenceRecord::snapshot(node) {
            Some(reference) => {
                let name = reference.name().to_string();
                trace!(name = %name, "assignment binds target");
                self.scope.add_to_symbol_table(&name, reference);
                true
            }
            None => {
                self.diagnostics.report(
                    ExpressionKind::Assignment.name(),
                    &messages::THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE,
                    &[],
                );
                false
            }
        }
    }

    // ========================================================================
    // Object literals
    // ========================================================================

    fn resolve_object_literal(&mut self, node: &mut ObjectLiteralExpression) -> bool {
        let Some(properties) = node.properties.as_mut() else {
            self.diagnostics.report(
                ExpressionKind::ObjectLiteral.name(),
                &messages::PROPERTY_ASSIGNMENT_EXPECTED,
                &[],
            );
            return false;
        };
        let mut all_resolved = true;
        for property in properties.iter_mut() {
            all_resolved &= self.resolve_property_definition(property);
        }
        all_resolved
    }

    fn resolve_property_definition(&mut self, node: &mut PropertyDefinition) -> bool {
        let key_ok = self.resolve_required(ExpressionKind::PropertyDefinition, node.key.as_deref_mut());
        let value_ok =
            self.resolve_required(ExpressionKind::PropertyDefinition, node.value.as_deref_mut());
        key_ok && value_ok
    }

    // ========================================================================
    // Calls and operators
    // ========================================================================

    fn resolve_call(&mut self, node: &mut CallExpression) -> bool {
        let callee_ok = self.resolve_expression(&mut node.callee);
        let has_arguments = node.arguments.as_ref().is_some_and(|args| !args.list.is_empty());
        if has_arguments {
            self.diagnostics
                .report(ExpressionKind::Call.name(), &messages::ARGUMENT_LIST_NOT_RESOLVED, &[]);
        }
        callee_ok
    }

    /// Argument lists are not resolved yet and always succeed.
    fn resolve_arguments(&mut self, _node: &Arguments) -> bool {
        true
    }

    fn resolve_binary(&mut self, node: &mut BinaryExpression) -> bool {
        let lhs_ok = self.resolve_required(ExpressionKind::Binary, node.lhs.as_deref_mut());
        let rhs_ok = self.resolve_required(ExpressionKind::Binary, node.rhs.as_deref_mut());
        lhs_ok && rhs_ok
    }
}
