//! AST node definitions.
//!
//! Every node owns its children (`Box`/`Vec`), so a tree has no sharing and
//! no cycles. Children that the parser may leave out are `Option`s; the
//! resolution pass reports those as failures. After construction the only
//! state that changes is an identifier's binding.

use esc_types::ReferenceRecord;
use std::fmt;

// ============================================================================
// Expression
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntegerLiteral(IntegerLiteral),
    FloatLiteral(FloatLiteral),
    StringLiteral(StringLiteral),
    Identifier(IdentifierExpression),
    Assignment(AssignmentExpression),
    ObjectLiteral(ObjectLiteralExpression),
    PropertyDefinition(PropertyDefinition),
    LiteralPropertyName(LiteralPropertyName),
    ComputedPropertyName(ComputedPropertyName),
    Arguments(Arguments),
    Call(CallExpression),
    Binary(BinaryExpression),
}

/// The kind of an [`Expression`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Identifier,
    Assignment,
    ObjectLiteral,
    PropertyDefinition,
    LiteralPropertyName,
    ComputedPropertyName,
    Arguments,
    Call,
    Binary,
}

impl ExpressionKind {
    /// Node name used in dumps and messages.
    pub fn name(self) -> &'static str {
        match self {
            ExpressionKind::IntegerLiteral => "IntegerLiteralExpression",
            ExpressionKind::FloatLiteral => "DecimalLiteralExpression",
            ExpressionKind::StringLiteral => "StringLiteralExpression",
            ExpressionKind::Identifier => "IdentifierExpression",
            ExpressionKind::Assignment => "AssignmentExpression",
            ExpressionKind::ObjectLiteral => "ObjectLiteralExpression",
            ExpressionKind::PropertyDefinition => "PropertyDefinitionExpression",
            ExpressionKind::LiteralPropertyName => "LiteralPropertyNameExpression",
            ExpressionKind::ComputedPropertyName => "ComputedPropertyNameExpression",
            ExpressionKind::Arguments => "ArgumentsExpression",
            ExpressionKind::Call => "CallExpression",
            ExpressionKind::Binary => "BinaryExpression",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::IntegerLiteral(_) => ExpressionKind::IntegerLiteral,
            Expression::FloatLiteral(_) => ExpressionKind::FloatLiteral,
            Expression::StringLiteral(_) => ExpressionKind::StringLiteral,
            Expression::Identifier(_) => ExpressionKind::Identifier,
            Expression::Assignment(_) => ExpressionKind::Assignment,
            Expression::ObjectLiteral(_) => ExpressionKind::ObjectLiteral,
            Expression::PropertyDefinition(_) => ExpressionKind::PropertyDefinition,
            Expression::LiteralPropertyName(_) => ExpressionKind::LiteralPropertyName,
            Expression::ComputedPropertyName(_) => ExpressionKind::ComputedPropertyName,
            Expression::Arguments(_) => ExpressionKind::Arguments,
            Expression::Call(_) => ExpressionKind::Call,
            Expression::Binary(_) => ExpressionKind::Binary,
        }
    }

    // -- Construction helpers --

    pub fn integer(value: i64) -> Self {
        Expression::IntegerLiteral(IntegerLiteral { value })
    }

    pub fn float(value: f64) -> Self {
        Expression::FloatLiteral(FloatLiteral { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(IdentifierExpression::new(name))
    }

    pub fn assign(lhs: Expression, rhs: Expression) -> Self {
        Expression::Assignment(AssignmentExpression::new(Some(lhs), Some(rhs)))
    }

    pub fn binary(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(operator, Some(lhs), Some(rhs)))
    }

    pub fn object(properties: Vec<PropertyDefinition>) -> Self {
        Expression::ObjectLiteral(ObjectLiteralExpression {
            properties: Some(properties),
        })
    }

    pub fn call(callee: Expression, arguments: Option<Arguments>) -> Self {
        Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn as_identifier(&self) -> Option<&IdentifierExpression> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

// ============================================================================
// Identifier
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpression {
    pub name: String,
    /// Set once by name resolution.
    binding: Option<ReferenceRecord>,
}

impl IdentifierExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding: None,
        }
    }

    pub fn binding(&self) -> Option<&ReferenceRecord> {
        self.binding.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Attach the resolved reference. A binding is never replaced; returns
    /// `false` if one was already present.
    pub fn bind(&mut self, reference: ReferenceRecord) -> bool {
        if self.binding.is_some() {
            return false;
        }
        self.binding = Some(reference);
        true
    }
}

// ============================================================================
// Assignment
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    /// The target. Must be reference-capable (an identifier).
    pub lhs: Option<Box<Expression>>,
    /// The value. Absent for a bare l-value form.
    pub rhs: Option<Box<Expression>>,
}

impl AssignmentExpression {
    pub fn new(lhs: Option<Expression>, rhs: Option<Expression>) -> Self {
        Self {
            lhs: lhs.map(Box::new),
            rhs: rhs.map(Box::new),
        }
    }
}

// ============================================================================
// Object literals
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteralExpression {
    /// `None` when the parser produced no list at all, as opposed to `{}`.
    pub properties: Option<Vec<PropertyDefinition>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub key: Option<Box<Expression>>,
    pub value: Option<Box<Expression>>,
}

impl PropertyDefinition {
    pub fn new(key: Expression, value: Option<Expression>) -> Self {
        Self {
            key: Some(Box::new(key)),
            value: value.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralPropertyName {
    pub inner: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPropertyName {
    pub inner: Option<Box<Expression>>,
}

impl LiteralPropertyName {
    pub fn new(inner: Expression) -> Self {
        Self {
            inner: Some(Box::new(inner)),
        }
    }
}

impl ComputedPropertyName {
    pub fn new(inner: Expression) -> Self {
        Self {
            inner: Some(Box::new(inner)),
        }
    }
}

// ============================================================================
// Calls
// ============================================================================

/// An argument list. Each argument is an assignment-level expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub list: Vec<AssignmentExpression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Option<Arguments>,
}

// ============================================================================
// Binary
// ============================================================================

/// The supported binary operators, one per runtime operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOperator::Plus),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '%' => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            BinaryOperator::Plus => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Modulo => '%',
        }
    }

    /// Name of the runtime operation implementing this operator.
    pub fn runtime_name(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "Plus",
            BinaryOperator::Subtract => "Subtract",
            BinaryOperator::Multiply => "Multiply",
            BinaryOperator::Divide => "Divide",
            BinaryOperator::Modulo => "Modulo",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub lhs: Option<Box<Expression>>,
    pub rhs: Option<Box<Expression>>,
    pub operator: BinaryOperator,
}

impl BinaryExpression {
    pub fn new(operator: BinaryOperator, lhs: Option<Expression>, rhs: Option<Expression>) -> Self {
        Self {
            lhs: lhs.map(Box::new),
            rhs: rhs.map(Box::new),
            operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esc_types::EsValue;

    #[test]
    fn test_operator_chars_round_trip() {
        for c in ['+', '-', '*', '/', '%'] {
            let op = BinaryOperator::from_char(c);
            assert_eq!(op.map(BinaryOperator::as_char), Some(c));
        }
        assert_eq!(BinaryOperator::from_char('^'), None);
        assert_eq!(BinaryOperator::Modulo.runtime_name(), "Modulo");
    }

    #[test]
    fn test_binding_is_set_once() {
        let mut id = IdentifierExpression::new("x");
        assert!(!id.is_bound());
        assert!(id.bind(ReferenceRecord::new("x", EsValue::number(1.0))));
        assert!(!id.bind(ReferenceRecord::new("x", EsValue::Null)));
        assert_eq!(id.binding().map(|r| r.base_value()), Some(&EsValue::number(1.0)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Expression::integer(1).kind(), ExpressionKind::IntegerLiteral);
        assert_eq!(Expression::identifier("a").kind().to_string(), "IdentifierExpression");
        let call = Expression::call(Expression::identifier("f"), None);
        assert_eq!(call.kind(), ExpressionKind::Call);
    }
}
