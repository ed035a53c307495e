//! Codegen error types

use esc_ast::ExpressionKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Unsupported construct: {0}")]
    Unsupported(ExpressionKind),

    #[error("Missing operand in {0}")]
    MissingOperand(ExpressionKind),

    #[error("Assignment target is not a name")]
    InvalidAssignmentTarget,

    #[error("No register available for {0} operand")]
    RegisterUnderflow(ExpressionKind),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type CodegenResult<T> = Result<T, CodegenError>;
