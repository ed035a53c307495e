//! esc_types: The ECMAScript value/type lattice.
//!
//! Defines the language values ([`EsValue`] and its [`Type`] tag), a minimal
//! object model, the Reference capability, and the ECMA-262 abstract
//! conversion operations (ToPrimitive, ToBoolean, ToNumber, ToString).

pub mod conversion;
pub mod object;
pub mod reference;
pub mod value;

pub use conversion::{to_boolean, to_number, to_primitive, to_string};
pub use object::{EsObject, Function, Object, StringObject};
pub use reference::{Reference, ReferenceRecord};
pub use value::{EsValue, Number, NumberKind, Symbol, Type};
