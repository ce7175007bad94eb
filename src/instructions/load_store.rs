//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator, setting the zero and negative flags
/// from the loaded value.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<'_, M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.machine.a = value;
    cpu.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, targeting the X register.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<'_, M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.machine.x = value;
    cpu.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, targeting the Y register.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<'_, M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.machine.y = value;
    cpu.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Writes the accumulator to the resolved effective address. Stores never
/// affect any flag.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<'_, M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    let value = cpu.machine.a;
    cpu.write_byte(addr, value);
}
