//! The lexical scope collaborator.

use esc_types::ReferenceRecord;

/// What resolution needs from a scope: look a name up, and bind a name.
///
/// Scopes are flat; there is no parent chain. A scope is mutated in place,
/// so only one resolution pass may use it at a time.
pub trait LexicalScope {
    /// The reference currently bound to `name`.
    fn resolve(&self, name: &str) -> Option<&ReferenceRecord>;

    /// Bind `name`, replacing any previous binding.
    fn add_to_symbol_table(&mut self, name: &str, reference: ReferenceRecord);
}
