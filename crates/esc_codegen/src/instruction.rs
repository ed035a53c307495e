//! The pseudo-instruction vocabulary and its text form.
//!
//! Each instruction writes one register and calls one runtime operation:
//!
//! ```text
//! $0 = Core::Reference("a")
//! $1 = Core::Number(2)
//! $2 = Core::Number(1)
//! $3 = Core::Plus($1, $2)
//! $4 = Core::Assign($0, $3)
//! ```

use crate::register::Register;
use esc_ast::BinaryOperator;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Construct a Number from an integer literal.
    Number { dest: Register, value: i64 },
    /// Materialize a reference descriptor for `name`.
    Reference { dest: Register, name: String },
    /// Store `value` through `reference`.
    Assign {
        dest: Register,
        reference: Register,
        value: Register,
    },
    Binary {
        dest: Register,
        operator: BinaryOperator,
        left: Register,
        right: Register,
    },
}

impl Instruction {
    pub fn dest(&self) -> Register {
        match self {
            Instruction::Number { dest, .. }
            | Instruction::Reference { dest, .. }
            | Instruction::Assign { dest, .. }
            | Instruction::Binary { dest, .. } => *dest,
        }
    }

    /// Name of the runtime operation this instruction calls.
    pub fn operation(&self) -> &'static str {
        match self {
            Instruction::Number { .. } => "Number",
            Instruction::Reference { .. } => "Reference",
            Instruction::Assign { .. } => "Assign",
            Instruction::Binary { operator, .. } => operator.runtime_name(),
        }
    }

    /// Render with registers printed as `<prefix><index>`.
    pub fn display<'a>(&'a self, register_prefix: &'a str) -> DisplayInstruction<'a> {
        DisplayInstruction {
            instruction: self,
            prefix: register_prefix,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display("$"), f)
    }
}

/// Text form of an [`Instruction`] under a register prefix.
pub struct DisplayInstruction<'a> {
    instruction: &'a Instruction,
    prefix: &'a str,
}

impl DisplayInstruction<'_> {
    fn reg(&self, reg: Register) -> RegisterText<'_> {
        RegisterText(self.prefix, reg)
    }
}

struct RegisterText<'a>(&'a str, Register);

impl fmt::Display for RegisterText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1.index())
    }
}

impl fmt::Display for DisplayInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instruction = self.instruction;
        write!(f, "{} = Core::{}(", self.reg(instruction.dest()), instruction.operation())?;
        match instruction {
            Instruction::Number { value, .. } => write!(f, "{}", value)?,
            Instruction::Reference { name, .. } => write!(f, "{:?}", name)?,
            Instruction::Assign {
                reference, value, ..
            } => write!(f, "{}, {}", self.reg(*reference), self.reg(*value))?,
            Instruction::Binary { left, right, .. } => {
                write!(f, "{}, {}", self.reg(*left), self.reg(*right))?
            }
        }
        f.write_str(")")
    }
}
