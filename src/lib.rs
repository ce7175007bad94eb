//! # 6502 CPU Interpreter Core
//!
//! A cycle-counted interpreter for a subset of the MOS Technology 6502
//! instruction set: register loads across every applicable addressing mode,
//! register increment/decrement, and accumulator stores.
//!
//! The design splits the processor into two pieces:
//!
//! - [`Machine`] - pure state: registers, status flags, the program counter,
//!   the stack pointer, and a flat 64 KiB address space behind the
//!   [`MemoryBus`] trait. No behavior beyond `reset` and accessors.
//! - [`Cpu`] - the execution engine. It borrows a `Machine` mutably and
//!   drives the fetch-decode-execute loop, charging one cycle for every byte
//!   fetched or memory cell touched.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, FlatMemory, Machine};
//!
//! let mut machine = Machine::new(FlatMemory::new());
//! let mut cpu = Cpu::new(&mut machine);
//!
//! // LDA #$05
//! cpu.load(0xA9);
//! cpu.load(0x05);
//! cpu.run(2).unwrap();
//!
//! assert_eq!(cpu.machine().a(), 0x05);
//! assert!(!cpu.machine().flag_z());
//! assert!(!cpu.machine().flag_n());
//! assert_eq!(cpu.machine().pc(), 0x0002);
//! ```
//!
//! ## Cycle Model
//!
//! `run` takes a signed cycle budget and keeps fetching instructions while it
//! is positive. Every byte fetch and every memory read or write costs one
//! cycle; indexed zero-page addressing and register increment/decrement add
//! one cycle of pure computation. An instruction that has started always
//! completes, so the budget can finish negative. Page-boundary crossings
//! during `Absolute,X`/`Absolute,Y`/`(Indirect),Y` addressing cost one extra
//! cycle for a dummy read, and `(Indirect,X)` charges its dummy read
//! unconditionally - see [`addressing::AddressingMode`].
//!
//! ## Modules
//!
//! - `machine` - processor state and the reset invariant
//! - `cpu` - execution engine and addressing-mode resolution
//! - `memory` - MemoryBus trait and the flat 64 KiB implementation
//! - `addressing` - addressing mode enumeration
//! - `opcodes` - opcode byte constants

pub mod addressing;
pub mod cpu;
pub mod machine;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::Cpu;
pub use machine::Machine;
pub use memory::{FlatMemory, MemoryBus};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte does not decode to any implemented instruction.
    ///
    /// Contains the opcode byte value for debugging purposes. The fetch
    /// cycle has already been charged and the program counter has already
    /// advanced past the bad byte when this is returned.
    InvalidOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode(opcode) => {
                write!(f, "Opcode 0x{:02X} does not decode to an instruction", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
