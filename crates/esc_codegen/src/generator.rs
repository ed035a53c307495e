//! The code generation pass.
//!
//! Walks a resolved expression and appends instructions. Operator and
//! assignment instructions pick their operands by position in the register
//! sequence (the most recently produced registers), not by walking back to
//! the child that produced them.

use crate::error::{CodegenError, CodegenResult};
use crate::instruction::Instruction;
use crate::register::RegisterAllocator;
use esc_ast::{AssignmentExpression, BinaryExpression, Expression, ExpressionKind};
use esc_types::Reference;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What to do with a construct that has no emission yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnsupportedPolicy {
    /// Emit nothing and carry on.
    #[default]
    Silent,
    /// Fail with [`CodegenError::Unsupported`].
    Error,
}

/// Emits instructions for expressions, taking registers from a shared
/// allocator.
pub struct CodeGenerator<'r> {
    registers: &'r mut RegisterAllocator,
    policy: UnsupportedPolicy,
    instructions: Vec<Instruction>,
    skipped: Vec<ExpressionKind>,
}

impl<'r> CodeGenerator<'r> {
    pub fn new(registers: &'r mut RegisterAllocator) -> Self {
        Self::with_policy(registers, UnsupportedPolicy::default())
    }

    pub fn with_policy(registers: &'r mut RegisterAllocator, policy: UnsupportedPolicy) -> Self {
        Self {
            registers,
            policy,
            instructions: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Constructs that emitted nothing, in visit order.
    pub fn skipped(&self) -> &[ExpressionKind] {
        &self.skipped
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Emit `expr`. On failure nothing from `expr` is kept: its instructions
    /// are dropped and its registers are handed out again.
    pub fn emit_expression(&mut self, expr: &Expression) -> CodegenResult<()> {
        let registers = self.registers.count();
        let instructions = self.instructions.len();
        let skipped = self.skipped.len();

        let result = self.emit(expr);
        if result.is_err() {
            trace!(kind = %expr.kind(), registers, "rolling back failed emission");
            self.registers.rewind_to(registers);
            self.instructions.truncate(instructions);
            self.skipped.truncate(skipped);
        }
        result
    }

    fn emit(&mut self, expr: &Expression) -> CodegenResult<()> {
        match expr {
            Expression::IntegerLiteral(n) => {
                let dest = self.registers.allocate();
                self.push(Instruction::Number {
                    dest,
                    value: n.value,
                });
                Ok(())
            }
            Expression::Identifier(id) => {
                self.emit_reference(&id.name);
                Ok(())
            }
            Expression::Assignment(node) => self.emit_assignment(node),
            Expression::Binary(node) => self.emit_binary(node),
            Expression::StringLiteral(_)
            | Expression::FloatLiteral(_)
            | Expression::ObjectLiteral(_)
            | Expression::PropertyDefinition(_)
            | Expression::LiteralPropertyName(_)
            | Expression::ComputedPropertyName(_)
            | Expression::Arguments(_)
            | Expression::Call(_) => self.unsupported(expr.kind()),
        }
    }

    fn push(&mut self, instruction: Instruction) {
        trace!(instruction = %instruction, "emit");
        self.instructions.push(instruction);
    }

    fn unsupported(&mut self, kind: ExpressionKind) -> CodegenResult<()> {
        match self.policy {
            UnsupportedPolicy::Silent => {
                trace!(kind = %kind, "no emission");
                self.skipped.push(kind);
                Ok(())
            }
            UnsupportedPolicy::Error => Err(CodegenError::Unsupported(kind)),
        }
    }

    fn emit_reference(&mut self, name: &str) {
        let dest = self.registers.allocate();
        self.push(Instruction::Reference {
            dest,
            name: name.to_string(),
        });
    }

    /// Target reference first, then the value, then the store. The store
    /// reads the value from the last produced register.
    fn emit_assignment(&mut self, node: &AssignmentExpression) -> CodegenResult<()> {
        let name = node
            .referenced_name()
            .ok_or(CodegenError::InvalidAssignmentTarget)?;
        let rhs = node
            .rhs
            .as_deref()
            .ok_or(CodegenError::MissingOperand(ExpressionKind::Assignment))?;

        self.emit_reference(name);
        let reference = self
            .registers
            .recent(0)
            .ok_or(CodegenError::RegisterUnderflow(ExpressionKind::Assignment))?;
        self.emit(rhs)?;
        let value = self
            .registers
            .recent(0)
            .ok_or(CodegenError::RegisterUnderflow(ExpressionKind::Assignment))?;

        let dest = self.registers.allocate();
        self.push(Instruction::Assign {
            dest,
            reference,
            value,
        });
        Ok(())
    }

    /// Right operand first, then the left. The operator takes the
    /// second-to-last register as its left input and the last as its right.
    fn emit_binary(&mut self, node: &BinaryExpression) -> CodegenResult<()> {
        let (Some(lhs), Some(rhs)) = (node.lhs.as_deref(), node.rhs.as_deref()) else {
            return Err(CodegenError::MissingOperand(ExpressionKind::Binary));
        };
        self.emit(rhs)?;
        self.emit(lhs)?;

        let underflow = || CodegenError::RegisterUnderflow(ExpressionKind::Binary);
        let left = self.registers.recent(1).ok_or_else(underflow)?;
        let right = self.registers.recent(0).ok_or_else(underflow)?;
        let dest = self.registers.allocate();
        self.push(Instruction::Binary {
            dest,
            operator: node.operator,
            left,
            right,
        });
        Ok(())
    }
}
