//! The default scope: a flat symbol table.

use crate::scope::LexicalScope;
use esc_core::{FxBuild, Name, NameInterner};
use esc_types::ReferenceRecord;
use indexmap::IndexMap;

/// Maps interned names to their references, remembering the order in which
/// names were first bound.
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: NameInterner,
    table: IndexMap<Name, ReferenceRecord, FxBuild>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .get(name)
            .is_some_and(|name| self.table.contains_key(&name))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Bound names and their references, in first-binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceRecord)> {
        self.table
            .iter()
            .map(|(name, reference)| (self.names.resolve(*name), reference))
    }
}

impl LexicalScope for SymbolTable {
    fn resolve(&self, name: &str) -> Option<&ReferenceRecord> {
        let name = self.names.get(name)?;
        self.table.get(&name)
    }

    fn add_to_symbol_table(&mut self, name: &str, reference: ReferenceRecord) {
        let name = self.names.intern(name);
        self.table.insert(name, reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esc_types::EsValue;

    #[test]
    fn test_resolve_unknown_name() {
        let table = SymbolTable::new();
        assert!(table.resolve("x").is_none());
        assert!(!table.contains("x"));
    }

    #[test]
    fn test_add_then_resolve() {
        let mut table = SymbolTable::new();
        let reference = ReferenceRecord::new("x", EsValue::number(1.0));
        table.add_to_symbol_table("x", reference.clone());
        assert_eq!(table.resolve("x"), Some(&reference));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rebinding_replaces_in_place() {
        let mut table = SymbolTable::new();
        table.add_to_symbol_table("a", ReferenceRecord::new("a", EsValue::Null));
        table.add_to_symbol_table("b", ReferenceRecord::new("b", EsValue::Null));
        table.add_to_symbol_table("a", ReferenceRecord::new("a", EsValue::string("s")));

        let order: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(table.resolve("a").map(|r| r.base_value()), Some(&EsValue::string("s")));
    }
}
