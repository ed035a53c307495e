//! esc_diagnostics: Advisory diagnostics for the expression compiler.
//!
//! Resolution reports failure through its boolean result; the messages
//! collected here only explain *why*. Each message is a template with a code
//! and a category. Reporting one fills in its `{N}` placeholders and records
//! which kind of node it was reported at.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// The node failed to resolve.
    Error,
    /// Advisory only; resolution still succeeds.
    Warning,
}

impl DiagnosticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message template from the [`messages`] catalog.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// May contain `{0}`, `{1}`, ... placeholders.
    pub template: &'static str,
}

/// A reported diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
    /// Name of the expression kind the diagnostic was reported at.
    pub node: &'static str,
}

impl Diagnostic {
    pub fn new(node: &'static str, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            code: message.code,
            category: message.category,
            message_text: format_message(message.template, args),
            node,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ES{} at {}: {}",
            self.category, self.code, self.node, self.message_text
        )
    }
}

/// Fill `{N}` placeholders from `args` in one pass. Argument text is copied
/// verbatim, so an argument that itself looks like `{1}` is not expanded.
/// Placeholders without a matching argument are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after
            .find('}')
            .and_then(|close| Some((after[..close].parse::<usize>().ok()?, close)));
        match placeholder {
            Some((index, close)) if index < args.len() => {
                out.push_str(args[index]);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Diagnostics in report order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `message` at a node of kind `node`.
    pub fn report(&mut self, node: &'static str, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics.push(Diagnostic::new(node, message, args));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Error diagnostics reported at or after position `start`.
    pub fn errors_since(&self, start: usize) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .get(start..)
            .unwrap_or_default()
            .iter()
            .filter(|d| d.is_error())
    }

    /// Whether any diagnostic carries `code`.
    pub fn contains_code(&self, code: u32) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $category:ident, $template:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::$category,
                template: $template,
            }
        };
    }

    // ========================================================================
    // Missing children (1000-1999)
    // ========================================================================
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub const PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(1136, Error, "Property assignment expected.");

    // ========================================================================
    // Name resolution (2000-2999)
    // ========================================================================
    pub const CANNOT_FIND_NAME_0: DiagnosticMessage = diag!(2304, Error, "Cannot find name '{0}'.");
    pub const THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE: DiagnosticMessage = diag!(
        2364,
        Error,
        "The left-hand side of an assignment expression must be a variable or a property access."
    );

    // ========================================================================
    // Known gaps (7000-7999)
    // ========================================================================
    pub const ARGUMENT_LIST_NOT_RESOLVED: DiagnosticMessage =
        diag!(7001, Warning, "Call arguments are not resolved.");
}
