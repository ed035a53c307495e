//! esc_core: Core utilities for the esc expression compiler.
//!
//! Provides identifier interning and the hasher used by the symbol table.

pub mod intern;

pub use intern::{Name, NameInterner};

/// Build hasher for `indexmap`-backed tables that must keep insertion order.
pub type FxBuild = rustc_hash::FxBuildHasher;
