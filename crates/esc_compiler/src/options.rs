//! Compiler options and their JSON form.

use crate::error::CompilerResult;
use esc_codegen::UnsupportedPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for one compilation. Every field may be left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// What codegen does with constructs it has no emission for.
    pub unsupported_constructs: UnsupportedPolicy,
    /// Printed before each register index in the instruction text.
    pub register_prefix: String,
    /// Skip codegen for an expression whose names did not resolve.
    pub stop_on_resolution_error: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            unsupported_constructs: UnsupportedPolicy::Silent,
            register_prefix: "$".to_string(),
            stop_on_resolution_error: true,
        }
    }
}

/// Parse options from a JSON string.
pub fn parse_options(content: &str) -> Result<CompilerOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse options from a JSON file.
pub fn parse_options_file(path: impl AsRef<Path>) -> CompilerResult<CompilerOptions> {
    let content = std::fs::read_to_string(path)?;
    let options = parse_options(&content)?;
    Ok(options)
}
