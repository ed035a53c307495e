//! Compiler error types

use esc_codegen::CodegenError;
use esc_diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    OptionsError(#[from] serde_json::Error),

    #[error("Name resolution failed with {} error(s)", .0.len())]
    ResolutionError(Vec<Diagnostic>),

    #[error("Codegen error: {0}")]
    CodegenError(#[from] CodegenError),
}

pub type CompilerResult<T> = Result<T, CompilerError>;
