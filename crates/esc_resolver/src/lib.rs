//! esc_resolver: Name resolution against a lexical scope.
//!
//! The resolver walks an expression tree, binds identifiers to the
//! references their scope holds, and registers assignment targets as it
//! meets them. Failures are reported through the boolean result; the
//! collected diagnostics only describe them.

mod resolver;
mod scope;
mod symbol;

pub use resolver::NameResolver;
pub use scope::LexicalScope;
pub use symbol::SymbolTable;
