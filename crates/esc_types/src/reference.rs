//! The Reference capability and the Reference Record value.
//!
//! [`Reference`] is implemented by anything that can stand for an l-value:
//! the Reference Record value itself, and (in `esc_ast`) assignment and
//! identifier nodes. Only the base and the name are required; every flag is
//! derived from them.

use crate::value::{EsValue, Type};

/// Operations of an ECMAScript Reference Record.
pub trait Reference {
    /// The value the reference is based on.
    fn base(&self) -> EsValue;

    /// The referenced name, when there is one.
    fn referenced_name(&self) -> Option<&str>;

    /// Strict mode is not supported.
    fn is_strict_reference(&self) -> bool {
        false
    }

    fn has_primitive_base(&self) -> bool {
        self.base().is_primitive()
    }

    /// Primitive bases count as boxed for property access.
    fn is_property_reference(&self) -> bool {
        let base = self.base();
        base.type_tag() == Type::Object || base.is_primitive()
    }

    fn is_unresolvable_reference(&self) -> bool {
        self.base().type_tag() == Type::Undefined
    }

    /// `super` is not supported.
    fn is_super_reference(&self) -> bool {
        false
    }
}

/// A Reference Record: what a name is bound to after resolution, and the
/// payload of Reference-typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    name: String,
    base: Box<EsValue>,
}

impl ReferenceRecord {
    pub fn new(name: impl Into<String>, base: EsValue) -> Self {
        Self {
            name: name.into(),
            base: Box::new(base),
        }
    }

    /// Capture the current answers of any [`Reference`] implementor.
    ///
    /// Returns `None` when the implementor has no referenced name.
    pub fn snapshot(reference: &dyn Reference) -> Option<Self> {
        let name = reference.referenced_name()?;
        Some(Self {
            name: name.to_string(),
            base: Box::new(reference.base()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_value(&self) -> &EsValue {
        &self.base
    }
}

impl Reference for ReferenceRecord {
    fn base(&self) -> EsValue {
        (*self.base).clone()
    }

    fn referenced_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{EsObject, Object};

    #[test]
    fn test_string_base_flags() {
        let r = ReferenceRecord::new("s", EsValue::string("hi"));
        assert_eq!(r.referenced_name(), Some("s"));
        assert!(r.has_primitive_base());
        assert!(r.is_property_reference());
        assert!(!r.is_unresolvable_reference());
        assert!(!r.is_strict_reference());
        assert!(!r.is_super_reference());
    }

    #[test]
    fn test_object_base_is_property_reference() {
        let r = ReferenceRecord::new("o", EsValue::Object(Object::Ordinary(EsObject::new())));
        assert!(!r.has_primitive_base());
        assert!(r.is_property_reference());
    }

    #[test]
    fn test_undefined_base_is_unresolvable() {
        let r = ReferenceRecord::new("u", EsValue::Undefined);
        assert!(r.is_unresolvable_reference());
        // Undefined is itself primitive.
        assert!(r.has_primitive_base());
    }

    #[test]
    fn test_reference_base_is_neither_primitive_nor_object() {
        let inner = ReferenceRecord::new("inner", EsValue::Null);
        let r = ReferenceRecord::new("outer", EsValue::Reference(inner));
        assert!(!r.has_primitive_base());
        assert!(!r.is_property_reference());
        assert!(!r.is_unresolvable_reference());
    }

    #[test]
    fn test_snapshot_copies_answers() {
        let original = ReferenceRecord::new("n", EsValue::number(5.0));
        let copy = ReferenceRecord::snapshot(&original);
        assert_eq!(copy, Some(original));
    }
}
