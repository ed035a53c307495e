//! esc_ast: Expression tree for the esc compiler.
//!
//! Defines the expression node set handed over by the parser, the
//! [`Reference`](esc_types::Reference) implementations for l-value nodes, and
//! the indented diagnostic dump.

pub mod dump;
pub mod node;
mod reference;

pub use node::*;
