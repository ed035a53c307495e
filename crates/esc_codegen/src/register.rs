//! Virtual registers.
//!
//! Every value-producing node takes the next register from a single counter.
//! One allocator is shared by everything emitted in a compilation, so indices
//! keep increasing across top-level expressions.

use std::fmt;

/// A virtual register index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u32);

impl Register {
    pub fn new(index: u32) -> Self {
        Register(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterAllocator {
    next_reg: u32,
}

impl RegisterAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next register.
    pub fn allocate(&mut self) -> Register {
        let reg = Register(self.next_reg);
        self.next_reg += 1;
        reg
    }

    /// Number of registers handed out so far.
    pub fn count(&self) -> u32 {
        self.next_reg
    }

    /// Forget every register from index `count` on, so the next allocation
    /// reuses it. A `count` past the current one is ignored.
    pub fn rewind_to(&mut self, count: u32) {
        self.next_reg = self.next_reg.min(count);
    }

    /// The register produced `back` allocations ago: `recent(0)` is the
    /// last one, `recent(1)` the one before it.
    pub fn recent(&self, back: u32) -> Option<Register> {
        self.next_reg.checked_sub(back + 1).map(Register)
    }
}
