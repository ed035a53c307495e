//! Abstract type conversion operations (ECMA-262 §7.1).
//!
//! All four operations are pure functions of their argument. They never
//! fail: where the language would throw, or where an algorithm is not
//! implemented yet, a fixed substitute is returned instead. Each function
//! lists its substitutes.
//!
//! A Reference argument has no conversion. `to_number` and `to_string`
//! return `None` for it so callers have to handle that case.

use crate::value::{EsValue, Number};

/// Placeholder produced for every object by [`to_primitive`].
pub const OBJECT_PRIMITIVE_PLACEHOLDER: &str = "object[Object]";

/// 7.1.1 ToPrimitive ( input )
///
/// Primitives pass through unchanged. Objects become the fixed string
/// [`OBJECT_PRIMITIVE_PLACEHOLDER`]; `[[DefaultValue]]` with its
/// `toString`/`valueOf` negotiation is not implemented. Anything else
/// becomes Undefined.
pub fn to_primitive(input: &EsValue) -> EsValue {
    match input {
        EsValue::Undefined
        | EsValue::Null
        | EsValue::Boolean(_)
        | EsValue::String(_)
        | EsValue::Symbol(_)
        | EsValue::Number(_) => input.clone(),
        EsValue::Object(_) => EsValue::string(OBJECT_PRIMITIVE_PLACEHOLDER),
        EsValue::Reference(_) => EsValue::Undefined,
    }
}

/// 7.1.2 ToBoolean ( argument )
///
/// Every Number and every String is true: the +0/-0/NaN and empty-string
/// cases are not implemented.
pub fn to_boolean(argument: &EsValue) -> bool {
    match argument {
        EsValue::Undefined | EsValue::Null | EsValue::Reference(_) => false,
        EsValue::Boolean(b) => *b,
        // TODO: false for +0, -0 and NaN (§7.1.2 table, Number row).
        EsValue::Number(_) => true,
        // TODO: false for the empty String.
        EsValue::String(_) => true,
        EsValue::Symbol(_) | EsValue::Object(_) => true,
    }
}

/// 7.1.3 ToNumber ( argument )
///
/// Strings are not parsed (§7.1.3.1) and become NaN. Symbols become NaN
/// where the language throws a TypeError.
pub fn to_number(argument: &EsValue) -> Option<Number> {
    match argument {
        EsValue::Undefined => Some(Number::nan()),
        EsValue::Null => Some(Number::zero()),
        EsValue::Boolean(true) => Some(Number::new(1.0)),
        EsValue::Boolean(false) => Some(Number::zero()),
        EsValue::Number(n) => Some(*n),
        EsValue::String(_) => Some(Number::nan()),
        EsValue::Symbol(_) => Some(Number::nan()),
        EsValue::Object(_) => to_number(&to_primitive(argument)),
        EsValue::Reference(_) => None,
    }
}

/// 7.1.12 ToString ( argument )
///
/// Undefined renders as `"Undefined"` (capitalized, unlike the language's
/// `"undefined"`) and so does Symbol, where the language throws a TypeError.
/// Both infinities render as `"Infinity"`.
pub fn to_string(argument: &EsValue) -> Option<String> {
    match argument {
        EsValue::Undefined => Some("Undefined".to_string()),
        EsValue::Null => Some("null".to_string()),
        EsValue::Boolean(true) => Some("true".to_string()),
        EsValue::Boolean(false) => Some("false".to_string()),
        // ToPrimitive of a String is the same String.
        EsValue::String(s) => Some(s.clone()),
        EsValue::Symbol(_) => Some("Undefined".to_string()),
        EsValue::Object(_) => to_string(&to_primitive(argument)),
        EsValue::Reference(_) => None,
        EsValue::Number(n) => Some(number_to_string(n)),
    }
}

/// 7.1.12.1 ToString applied to the Number type, simplified.
fn number_to_string(n: &Number) -> String {
    if n.is_infinity() {
        "Infinity".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else {
        n.to_string()
    }
}
