//! esc_codegen: Register pseudo-instruction generation.
//!
//! Lowers resolved expressions to a linear list of instructions over
//! virtual registers. Registers come from a [`RegisterAllocator`] the caller
//! owns and passes in, so numbering can span several expressions.

pub mod error;
pub mod generator;
pub mod instruction;
pub mod register;

pub use error::{CodegenError, CodegenResult};
pub use generator::{CodeGenerator, UnsupportedPolicy};
pub use instruction::{DisplayInstruction, Instruction};
pub use register::{Register, RegisterAllocator};
