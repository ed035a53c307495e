//! The ECMAScript value lattice.
//!
//! [`EsValue`] is the top type. Its variants form the closed set of language
//! types plus the Reference specification type; [`Type`] is the matching tag.
//! Values are immutable once constructed and own everything they contain.

use crate::object::Object;
use crate::reference::ReferenceRecord;
use std::fmt;

/// Type tag identifying which kind of value an [`EsValue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Undefined,
    Null,
    Boolean,
    String,
    Symbol,
    Number,
    Object,
    Reference,
}

impl Type {
    /// Every tag, in declaration order.
    pub const ALL: [Type; 8] = [
        Type::Undefined,
        Type::Null,
        Type::Boolean,
        Type::String,
        Type::Symbol,
        Type::Number,
        Type::Object,
        Type::Reference,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Type::Undefined => "undefined",
            Type::Null => "null",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Symbol => "symbol",
            Type::Number => "number",
            Type::Object => "object",
            Type::Reference => "reference",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which refinement of Number a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Finite,
    NaN,
    PosInfinity,
    NegInfinity,
}

/// A Number value.
///
/// The refinement is fixed at construction, so exactly one of
/// [`is_finite`](Self::is_finite), [`is_infinity`](Self::is_infinity) and
/// [`is_nan`](Self::is_nan) holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value: f64,
    kind: NumberKind,
}

impl Number {
    /// Classify `value` into its refinement.
    pub fn new(value: f64) -> Self {
        let kind = if value.is_nan() {
            NumberKind::NaN
        } else if value == f64::INFINITY {
            NumberKind::PosInfinity
        } else if value == f64::NEG_INFINITY {
            NumberKind::NegInfinity
        } else {
            NumberKind::Finite
        };
        Self { value, kind }
    }

    pub fn nan() -> Self {
        Self::new(f64::NAN)
    }

    pub fn pos_infinity() -> Self {
        Self::new(f64::INFINITY)
    }

    pub fn neg_infinity() -> Self {
        Self::new(f64::NEG_INFINITY)
    }

    pub fn zero() -> Self {
        Self::new(0.0)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn is_nan(&self) -> bool {
        self.kind == NumberKind::NaN
    }

    pub fn is_finite(&self) -> bool {
        self.kind == NumberKind::Finite
    }

    /// Non-standard: true for either infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self.kind, NumberKind::PosInfinity | NumberKind::NegInfinity)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::new(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::new(value as f64)
    }
}

/// Decimal rendering. Negative zero prints as `0`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NumberKind::NaN => f.write_str("NaN"),
            NumberKind::PosInfinity => f.write_str("Infinity"),
            NumberKind::NegInfinity => f.write_str("-Infinity"),
            NumberKind::Finite if self.value == 0.0 => f.write_str("0"),
            NumberKind::Finite => write!(f, "{}", self.value),
        }
    }
}

/// A Symbol value, identified by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    description: String,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Any ECMAScript value.
#[derive(Debug, Clone, PartialEq)]
pub enum EsValue {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Symbol(Symbol),
    Number(Number),
    Object(Object),
    Reference(ReferenceRecord),
}

impl EsValue {
    pub fn string(value: impl Into<String>) -> Self {
        EsValue::String(value.into())
    }

    pub fn number(value: f64) -> Self {
        EsValue::Number(Number::new(value))
    }

    pub fn symbol(description: impl Into<String>) -> Self {
        EsValue::Symbol(Symbol::new(description))
    }

    pub fn type_tag(&self) -> Type {
        match self {
            EsValue::Undefined => Type::Undefined,
            EsValue::Null => Type::Null,
            EsValue::Boolean(_) => Type::Boolean,
            EsValue::String(_) => Type::String,
            EsValue::Symbol(_) => Type::Symbol,
            EsValue::Number(_) => Type::Number,
            EsValue::Object(_) => Type::Object,
            EsValue::Reference(_) => Type::Reference,
        }
    }

    /// Undefined and Null count as primitives alongside Boolean, String,
    /// Symbol and Number. Objects and References do not.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, EsValue::Object(_) | EsValue::Reference(_))
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            EsValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EsValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EsValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Number> for EsValue {
    fn from(value: Number) -> Self {
        EsValue::Number(value)
    }
}

impl From<bool> for EsValue {
    fn from(value: bool) -> Self {
        EsValue::Boolean(value)
    }
}

impl From<Object> for EsValue {
    fn from(value: Object) -> Self {
        EsValue::Object(value)
    }
}

impl From<ReferenceRecord> for EsValue {
    fn from(value: ReferenceRecord) -> Self {
        EsValue::Reference(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::EsObject;

    fn exactly_one(n: &Number) -> bool {
        let finite = n.is_finite() && !n.is_nan();
        [finite, n.is_infinity(), n.is_nan()]
            .iter()
            .filter(|flag| **flag)
            .count()
            == 1
    }

    #[test]
    fn test_number_refinements_are_exclusive() {
        let cases = [
            (Number::new(3.5), NumberKind::Finite),
            (Number::nan(), NumberKind::NaN),
            (Number::pos_infinity(), NumberKind::PosInfinity),
            (Number::neg_infinity(), NumberKind::NegInfinity),
        ];
        for (n, kind) in cases {
            assert_eq!(n.kind(), kind);
            assert!(exactly_one(&n), "{:?}", n);
        }
        assert!(Number::pos_infinity().is_infinity());
        assert!(Number::neg_infinity().is_infinity());
        assert!(!Number::nan().is_infinity());
        assert!(!Number::pos_infinity().is_nan());
    }

    #[test]
    fn test_number_new_normalizes_payload() {
        assert!(Number::new(f64::NAN).is_nan());
        assert_eq!(Number::new(1.0 / 0.0).kind(), NumberKind::PosInfinity);
        assert_eq!(Number::new(-1.0 / 0.0).kind(), NumberKind::NegInfinity);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::new(3.5).to_string(), "3.5");
        assert_eq!(Number::new(42.0).to_string(), "42");
        assert_eq!(Number::new(-0.0).to_string(), "0");
        assert_eq!(Number::nan().to_string(), "NaN");
        assert_eq!(Number::neg_infinity().to_string(), "-Infinity");
    }

    #[test]
    fn test_type_tag_matches_variant() {
        let values = [
            (EsValue::Undefined, Type::Undefined),
            (EsValue::Null, Type::Null),
            (EsValue::Boolean(true), Type::Boolean),
            (EsValue::string("s"), Type::String),
            (EsValue::symbol("sym"), Type::Symbol),
            (EsValue::number(1.0), Type::Number),
            (EsValue::Object(Object::Ordinary(EsObject::new())), Type::Object),
            (EsValue::Reference(ReferenceRecord::new("x", EsValue::Undefined)), Type::Reference),
        ];
        for (value, tag) in values {
            assert_eq!(value.type_tag(), tag);
        }
    }

    #[test]
    fn test_is_primitive() {
        assert!(EsValue::Undefined.is_primitive());
        assert!(EsValue::Null.is_primitive());
        assert!(EsValue::symbol("s").is_primitive());
        assert!(!EsValue::Object(Object::Ordinary(EsObject::new())).is_primitive());
        assert!(!EsValue::Reference(ReferenceRecord::new("x", EsValue::Null)).is_primitive());
    }
}
