//! # Instruction Implementations
//!
//! This module contains the implementations of the supported instructions,
//! organized by category. Each instruction is a standalone function taking a
//! mutable reference to the execution engine; all operand handling goes
//! through the engine's addressing-mode resolution so cycle accounting stays
//! centralized.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA)
//! - **inc_dec**: Register increment and decrement (INX, INY, DEX, DEY)

pub(crate) mod inc_dec;
pub(crate) mod load_store;
