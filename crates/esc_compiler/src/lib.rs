//! esc_compiler: Compiler orchestration.
//!
//! Runs name resolution and then code generation over top-level
//! expressions, sharing one scope and one register counter across the whole
//! compilation, and collects the instructions into a [`Program`].

pub mod error;
pub mod options;

pub use error::{CompilerError, CompilerResult};
pub use options::{parse_options, parse_options_file, CompilerOptions};

use esc_ast::Expression;
use esc_codegen::{CodeGenerator, CodegenResult, Instruction, RegisterAllocator};
use esc_diagnostics::DiagnosticCollection;
use esc_resolver::{NameResolver, SymbolTable};
use std::io::Write;
use tracing::{debug, warn};

/// The instructions produced by a compilation, in emission order.
#[derive(Debug, Clone)]
pub struct Program {
    instructions: Vec<Instruction>,
    register_prefix: String,
}

impl Program {
    pub fn new(register_prefix: impl Into<String>) -> Self {
        Self {
            instructions: Vec::new(),
            register_prefix: register_prefix.into(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    fn extend(&mut self, instructions: Vec<Instruction>) {
        self.instructions.extend(instructions);
    }

    /// Write one instruction per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> CodegenResult<()> {
        for instruction in &self.instructions {
            writeln!(out, "{}", instruction.display(&self.register_prefix))?;
        }
        out.flush()?;
        Ok(())
    }

    /// The text [`Program::write_to`] would write.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for instruction in &self.instructions {
            text.push_str(&instruction.display(&self.register_prefix).to_string());
            text.push('\n');
        }
        text
    }
}

/// One compilation: a scope, a register counter and the program built so
/// far.
pub struct Compilation {
    options: CompilerOptions,
    scope: SymbolTable,
    registers: RegisterAllocator,
    program: Program,
    diagnostics: DiagnosticCollection,
}

impl Compilation {
    pub fn new(options: CompilerOptions) -> Self {
        let program = Program::new(options.register_prefix.clone());
        Self {
            options,
            scope: SymbolTable::new(),
            registers: RegisterAllocator::new(),
            program,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn scope(&self) -> &SymbolTable {
        &self.scope
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    /// Diagnostics from every expression compiled so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Resolve `expr`, then generate code for it. Returns whether resolution
    /// succeeded. When it did not and `stop_on_resolution_error` is set, no
    /// code is generated for `expr`.
    pub fn compile_expression(&mut self, expr: &mut Expression) -> CompilerResult<bool> {
        let mut resolver = NameResolver::new(&mut self.scope);
        let resolved = resolver.resolve_expression(expr);
        let diagnostics = resolver.take_diagnostics();
        debug!(
            kind = %expr.kind(),
            resolved,
            diagnostics = diagnostics.len(),
            "resolved expression"
        );
        self.diagnostics.extend(diagnostics);

        if !resolved && self.options.stop_on_resolution_error {
            warn!(kind = %expr.kind(), "skipping codegen for unresolved expression");
            return Ok(false);
        }

        let mut generator =
            CodeGenerator::with_policy(&mut self.registers, self.options.unsupported_constructs);
        generator.emit_expression(expr)?;
        let instructions = generator.into_instructions();
        debug!(count = instructions.len(), "generated instructions");
        self.program.extend(instructions);
        Ok(resolved)
    }

    /// Compile each expression in order. Every expression is attempted; if
    /// any failed to resolve, the error diagnostics reported by this call
    /// are returned as [`CompilerError::ResolutionError`].
    pub fn compile_all(&mut self, expressions: &mut [Expression]) -> CompilerResult<()> {
        let first_new = self.diagnostics.len();
        let mut all_resolved = true;
        for expr in expressions.iter_mut() {
            all_resolved &= self.compile_expression(expr)?;
        }
        if all_resolved {
            return Ok(());
        }
        let errors = self.diagnostics.errors_since(first_new).cloned().collect();
        Err(CompilerError::ResolutionError(errors))
    }
}

impl Default for Compilation {
    fn default() -> Self {
        Self::new(CompilerOptions::default())
    }
}
