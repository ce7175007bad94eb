//! # Register Increment and Decrement Instructions
//!
//! This module implements the register-only increment/decrement operations:
//! INX, INY, DEX, DEY. Each takes no operand, charges one cycle for the
//! arithmetic, wraps modulo 256, and updates the Z and N flags from the
//! register's final value.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Executes the INX (Increment X Register) instruction.
///
/// X wraps from 0xFF to 0x00 with no effect on the carry or overflow flags.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<'_, M>) {
    cpu.tick();
    let result = cpu.machine.x.wrapping_add(1);
    cpu.machine.x = result;
    cpu.set_zn(result);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<'_, M>) {
    cpu.tick();
    let result = cpu.machine.y.wrapping_add(1);
    cpu.machine.y = result;
    cpu.set_zn(result);
}

/// Executes the DEX (Decrement X Register) instruction.
///
/// X wraps from 0x00 to 0xFF, setting the negative flag.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<'_, M>) {
    cpu.tick();
    let result = cpu.machine.x.wrapping_sub(1);
    cpu.machine.x = result;
    cpu.set_zn(result);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<'_, M>) {
    cpu.tick();
    let result = cpu.machine.y.wrapping_sub(1);
    cpu.machine.y = result;
    cpu.set_zn(result);
}
