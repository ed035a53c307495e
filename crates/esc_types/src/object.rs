//! Minimal object model.
//!
//! Objects only carry own properties. The prototype link is recorded but
//! never consulted by `get`; prototype-chain lookup is not implemented.

use crate::conversion;
use crate::value::EsValue;
use indexmap::IndexMap;
use tracing::warn;

/// The Object refinements.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Ordinary(EsObject),
    String(StringObject),
    Function(Function),
}

impl Object {
    /// The property storage backing this object, if it has any.
    pub fn as_es_object(&self) -> Option<&EsObject> {
        match self {
            Object::Ordinary(o) => Some(o),
            Object::Function(f) => Some(&f.object),
            Object::String(_) => None,
        }
    }
}

/// An ordinary object: string-keyed own properties in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EsObject {
    properties: IndexMap<String, EsValue>,
    prototype: Option<Box<EsObject>>,
}

impl EsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: EsObject) -> Self {
        Self {
            properties: IndexMap::new(),
            prototype: Some(Box::new(prototype)),
        }
    }

    pub fn prototype(&self) -> Option<&EsObject> {
        self.prototype.as_deref()
    }

    /// Read the own property named by `ToString(key)`.
    ///
    /// A missing property, or a key with no string form, yields Undefined.
    pub fn get(&self, key: &EsValue) -> EsValue {
        let Some(key) = conversion::to_string(key) else {
            warn!("property key of type {} has no string form", key.type_tag());
            return EsValue::Undefined;
        };
        match self.properties.get(&key) {
            Some(value) => value.clone(),
            None => {
                warn!(key = %key, "property not found on object");
                EsValue::Undefined
            }
        }
    }

    /// Store `value` under `ToString(key)` and return it.
    pub fn set(&mut self, key: &EsValue, value: EsValue) -> EsValue {
        match conversion::to_string(key) {
            Some(key) => {
                self.properties.insert(key, value.clone());
            }
            None => warn!("property key of type {} has no string form", key.type_tag()),
        }
        value
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// A String wrapper object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringObject {
    value: String,
}

impl StringObject {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A function object. Calling is not modeled; it only carries properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Function {
    object: EsObject,
}

impl Function {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self) -> &EsObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut EsObject {
        &mut self.object
    }
}
