//! Identifier interning.
//!
//! Names bound during resolution are interned so the symbol table compares
//! and hashes `u32` handles instead of strings. One interner belongs to one
//! compilation; handles from different interners must not be mixed.

use lasso::{Rodeo, Spur};
use std::fmt;

/// An interned identifier name.
///
/// Comparing two `Name` values is an O(1) integer comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Name(Spur);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.0)
    }
}

/// Single-writer interner for identifier names.
///
/// The scope that owns it is mutated in place during resolution, so there is
/// no need for the threaded rodeo here.
#[derive(Default)]
pub struct NameInterner {
    rodeo: Rodeo,
}

impl NameInterner {
    pub fn new() -> Self {
        Self { rodeo: Rodeo::new() }
    }

    /// Intern `text`, returning the existing handle when it was seen before.
    #[inline]
    pub fn intern(&mut self, text: &str) -> Name {
        Name(self.rodeo.get_or_intern(text))
    }

    /// Look up a name without interning it.
    #[inline]
    pub fn get(&self, text: &str) -> Option<Name> {
        self.rodeo.get(text).map(Name)
    }

    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.rodeo.resolve(&name.0)
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl fmt::Debug for NameInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameInterner")
            .field("len", &self.len())
            .finish()
    }
}
