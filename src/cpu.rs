//! # Execution Engine
//!
//! This module contains the `Cpu` struct: the fetch-decode-execute engine
//! that drives a [`Machine`].
//!
//! ## Execution Model
//!
//! The engine borrows a machine mutably and executes instructions via:
//! - `step()`: Execute one instruction
//! - `run(cycle_budget)`: Execute instructions while the budget is positive
//!
//! ## Cycle Accounting
//!
//! Every byte fetch and every memory read or write costs one cycle. The cost
//! is charged inside the four access primitives (`fetch_byte`, `read_byte`,
//! `write_byte`, `tick`) so the rule lives in exactly one place - addressing
//! modes and instruction handlers never touch the counters directly. A
//! started instruction always completes, so the budget may end negative.
//!
//! ## Addressing-Mode Resolution
//!
//! All modes resolve through [`Cpu::effective_address`] /
//! [`Cpu::operand_value`]; every opcode handler reuses them, so new opcodes
//! get page-crossing and dummy-read cycle behavior for free.

use crate::addressing::AddressingMode;
use crate::instructions::{inc_dec, load_store};
use crate::machine::Machine;
use crate::memory::MemoryBus;
use crate::opcodes;
use crate::ExecutionError;

/// 6502 execution engine.
///
/// Borrows a [`Machine`] mutably for its whole lifetime, so exclusive access
/// to the state is enforced by the compiler. To host several independent
/// machines, construct one engine per machine value.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, Machine};
///
/// let mut machine = Machine::new(FlatMemory::new());
/// let mut cpu = Cpu::new(&mut machine);
///
/// // INX
/// cpu.load(0xE8);
/// cpu.run(2).unwrap();
///
/// assert_eq!(cpu.machine().x(), 0x01);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct Cpu<'m, M: MemoryBus> {
    /// The machine state being driven
    pub(crate) machine: &'m mut Machine<M>,

    /// Cycles remaining in the current `run` call. Signed: an instruction
    /// that starts on the last budgeted cycle still completes.
    budget: i64,

    /// Total cycles charged since construction or the last `reset`
    cycles: u64,
}

impl<'m, M: MemoryBus> Cpu<'m, M> {
    /// Creates an engine driving the given machine.
    pub fn new(machine: &'m mut Machine<M>) -> Self {
        Self {
            machine,
            budget: 0,
            cycles: 0,
        }
    }

    /// Resets the machine to its power-on invariant and zeroes the cycle
    /// counter.
    ///
    /// See [`Machine::reset`] for the exact state restored.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.budget = 0;
        self.cycles = 0;
    }

    /// Appends one byte to the program image at the bootstrap load cursor.
    ///
    /// Writes `byte` at `memory[load_cursor]` and advances the cursor with
    /// wrapping. The cursor is independent of the program counter, so a
    /// program can be assembled into memory without disturbing execution
    /// position. Bootstrap writes are not cycle-charged.
    pub fn load(&mut self, byte: u8) {
        let cursor = self.machine.load_cursor;
        self.machine.memory.write(cursor, byte);
        self.machine.load_cursor = cursor.wrapping_add(1);
    }

    /// Runs the engine until the cycle budget is exhausted.
    ///
    /// While the budget is positive, fetches the opcode at PC (one cycle),
    /// advances PC, and dispatches. Each instruction charges one cycle per
    /// byte fetched and per memory cell touched, plus the documented
    /// dummy-read penalties for indexed addressing. A non-positive budget
    /// executes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidOpcode`] when a fetched byte does
    /// not decode to an implemented instruction. The fetch cycle is still
    /// charged and PC has advanced past the offending byte, so a caller can
    /// inspect or skip it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, ExecutionError, FlatMemory, Machine};
    ///
    /// let mut machine = Machine::new(FlatMemory::new());
    /// let mut cpu = Cpu::new(&mut machine);
    ///
    /// cpu.load(0x02); // not an instruction
    /// match cpu.run(2) {
    ///     Err(ExecutionError::InvalidOpcode(0x02)) => {}
    ///     other => panic!("expected invalid opcode, got {:?}", other),
    /// }
    /// ```
    pub fn run(&mut self, cycle_budget: i64) -> Result<(), ExecutionError> {
        self.budget = cycle_budget;

        while self.budget > 0 {
            self.step()?;
        }

        Ok(())
    }

    /// Executes exactly one fetch-decode-execute iteration.
    ///
    /// Used by [`run`](Cpu::run) and handy on its own in tests. Does not
    /// consult the budget; the instruction always completes.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.fetch_byte();

        match opcode {
            opcodes::LDA_IMM => load_store::execute_lda(self, AddressingMode::Immediate),
            opcodes::LDA_ZP => load_store::execute_lda(self, AddressingMode::ZeroPage),
            opcodes::LDA_ZPX => load_store::execute_lda(self, AddressingMode::ZeroPageX),
            opcodes::LDA_ABS => load_store::execute_lda(self, AddressingMode::Absolute),
            opcodes::LDA_ABSX => load_store::execute_lda(self, AddressingMode::AbsoluteX),
            opcodes::LDA_ABSY => load_store::execute_lda(self, AddressingMode::AbsoluteY),
            opcodes::LDA_INDX => load_store::execute_lda(self, AddressingMode::IndirectX),
            opcodes::LDA_INDY => load_store::execute_lda(self, AddressingMode::IndirectY),

            opcodes::LDX_IMM => load_store::execute_ldx(self, AddressingMode::Immediate),
            opcodes::LDX_ZP => load_store::execute_ldx(self, AddressingMode::ZeroPage),
            opcodes::LDX_ZPY => load_store::execute_ldx(self, AddressingMode::ZeroPageY),
            opcodes::LDX_ABS => load_store::execute_ldx(self, AddressingMode::Absolute),
            opcodes::LDX_ABSY => load_store::execute_ldx(self, AddressingMode::AbsoluteY),

            opcodes::LDY_IMM => load_store::execute_ldy(self, AddressingMode::Immediate),
            opcodes::LDY_ZP => load_store::execute_ldy(self, AddressingMode::ZeroPage),
            opcodes::LDY_ZPX => load_store::execute_ldy(self, AddressingMode::ZeroPageX),
            opcodes::LDY_ABS => load_store::execute_ldy(self, AddressingMode::Absolute),
            opcodes::LDY_ABSX => load_store::execute_ldy(self, AddressingMode::AbsoluteX),

            opcodes::INX => inc_dec::execute_inx(self),
            opcodes::INY => inc_dec::execute_iny(self),
            opcodes::DEX => inc_dec::execute_dex(self),
            opcodes::DEY => inc_dec::execute_dey(self),

            opcodes::STA_ZP => load_store::execute_sta(self, AddressingMode::ZeroPage),
            opcodes::STA_ZPX => load_store::execute_sta(self, AddressingMode::ZeroPageX),
            opcodes::STA_ABS => load_store::execute_sta(self, AddressingMode::Absolute),
            opcodes::STA_ABSX => load_store::execute_sta(self, AddressingMode::AbsoluteX),
            opcodes::STA_ABSY => load_store::execute_sta(self, AddressingMode::AbsoluteY),
            opcodes::STA_INDX => load_store::execute_sta(self, AddressingMode::IndirectX),
            opcodes::STA_INDY => load_store::execute_sta(self, AddressingMode::IndirectY),

            other => return Err(ExecutionError::InvalidOpcode(other)),
        }

        Ok(())
    }

    // ========== Read Accessors ==========

    /// Returns a read-only view of the machine state for inspection.
    pub fn machine(&self) -> &Machine<M> {
        self.machine
    }

    /// Returns the total number of cycles charged since construction or the
    /// last [`reset`](Cpu::reset).
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Cycle-Charged Access Primitives ==========

    /// Charges one cycle with no memory access (index-addition and
    /// register increment/decrement cost).
    pub(crate) fn tick(&mut self) {
        self.budget -= 1;
        self.cycles += 1;
    }

    /// Reads the byte at PC, advances PC, and charges one cycle.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.machine.memory.read(self.machine.pc);
        self.machine.pc = self.machine.pc.wrapping_add(1);
        self.tick();
        byte
    }

    /// Reads a byte from memory and charges one cycle.
    pub(crate) fn read_byte(&mut self, addr: u16) -> u8 {
        let value = self.machine.memory.read(addr);
        self.tick();
        value
    }

    /// Writes a byte to memory and charges one cycle.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.machine.memory.write(addr, value);
        self.tick();
    }

    // ========== Addressing-Mode Resolution ==========

    /// Resolves an addressing mode to the operand value.
    ///
    /// Immediate mode fetches the operand byte directly; every other mode
    /// resolves an effective address and reads through it.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(),
            _ => {
                let addr = self.effective_address(mode);
                self.read_byte(addr)
            }
        }
    }

    /// Resolves an addressing mode to an effective memory address,
    /// consuming operand bytes and charging the mode's cycle costs.
    ///
    /// - Zero-page indexed modes wrap within the zero page and always
    ///   charge one cycle for the index addition.
    /// - Absolute indexed modes charge a dummy read at the unindexed base
    ///   only when the low-byte addition wraps past 0xFF (page crossing).
    /// - `(Indirect,X)` charges a dummy read at the unindexed pointer
    ///   unconditionally; the pointer indexing wraps within the zero page.
    /// - `(Indirect),Y` dereferences the zero-page pointer then applies the
    ///   absolute-indexed page-crossing rule with Y.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            // Dispatch never routes immediate-mode opcodes here
            AddressingMode::Immediate => unreachable!("immediate operands have no address"),

            AddressingMode::ZeroPage => u16::from(self.fetch_byte()),

            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                let index = self.machine.x;
                self.tick();
                u16::from(base.wrapping_add(index))
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                let index = self.machine.y;
                self.tick();
                u16::from(base.wrapping_add(index))
            }

            AddressingMode::Absolute => {
                let low = self.fetch_byte();
                let high = self.fetch_byte();
                u16::from(low) | u16::from(high) << 8
            }

            AddressingMode::AbsoluteX => {
                let low = self.fetch_byte();
                let high = self.fetch_byte();
                let index = self.machine.x;
                self.indexed_address(low, high, index)
            }

            AddressingMode::AbsoluteY => {
                let low = self.fetch_byte();
                let high = self.fetch_byte();
                let index = self.machine.y;
                self.indexed_address(low, high, index)
            }

            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte();
                // Dummy read at the unindexed pointer, charged unconditionally
                self.read_byte(u16::from(ptr));
                let ptr = ptr.wrapping_add(self.machine.x);
                let low = self.read_byte(u16::from(ptr));
                let high = self.read_byte(u16::from(ptr.wrapping_add(1)));
                u16::from(low) | u16::from(high) << 8
            }

            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let low = self.read_byte(u16::from(ptr));
                let high = self.read_byte(u16::from(ptr) + 1);
                let index = self.machine.y;
                self.indexed_address(low, high, index)
            }
        }
    }

    /// Adds an index to a 16-bit base given as low/high bytes, applying the
    /// page-crossing rule: when the low-byte addition wraps past 0xFF, a
    /// dummy read at the unindexed base is charged and the high byte is
    /// incremented.
    fn indexed_address(&mut self, low: u8, high: u8, index: u8) -> u16 {
        let base = u16::from(low) | u16::from(high) << 8;
        let low = low.wrapping_add(index);
        let mut high = high;

        if low < index {
            // Wrapped past 0xFF: crossed into the next page
            self.read_byte(base);
            high = high.wrapping_add(1);
        }

        u16::from(low) | u16::from(high) << 8
    }

    /// Sets the Zero and Negative flags from an 8-bit result.
    ///
    /// Z = (value == 0), N = bit 7 of value. Always a pure function of the
    /// value, never of prior flag state.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.machine.flag_z = value == 0;
        self.machine.flag_n = (value & 0x80) != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn setup() -> Machine<FlatMemory> {
        Machine::new(FlatMemory::new())
    }

    #[test]
    fn test_fetch_advances_pc_and_charges_cycle() {
        let mut machine = setup();
        machine.memory_mut().write(0x0000, 0x42);

        let mut cpu = Cpu::new(&mut machine);
        let byte = cpu.fetch_byte();

        assert_eq!(byte, 0x42);
        assert_eq!(cpu.machine().pc(), 0x0001);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_run_with_non_positive_budget_is_a_no_op() {
        let mut machine = setup();
        machine.memory_mut().write(0x0000, 0xE8); // INX

        let mut cpu = Cpu::new(&mut machine);
        cpu.run(0).unwrap();
        cpu.run(-3).unwrap();

        assert_eq!(cpu.machine().x(), 0x00);
        assert_eq!(cpu.machine().pc(), 0x0000);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_started_instruction_completes_past_budget() {
        let mut machine = setup();
        // LDA $1234 costs 4 cycles but a budget of 1 is enough to start it
        machine.memory_mut().write(0x0000, 0xAD);
        machine.memory_mut().write(0x0001, 0x34);
        machine.memory_mut().write(0x0002, 0x12);
        machine.memory_mut().write(0x1234, 0x99);

        let mut cpu = Cpu::new(&mut machine);
        cpu.run(1).unwrap();

        assert_eq!(cpu.machine().a(), 0x99);
        assert_eq!(cpu.machine().pc(), 0x0003);
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn test_invalid_opcode_charges_fetch_and_advances_pc() {
        let mut machine = setup();
        machine.memory_mut().write(0x0000, 0xFF);

        let mut cpu = Cpu::new(&mut machine);
        let result = cpu.run(2);

        assert_eq!(result, Err(ExecutionError::InvalidOpcode(0xFF)));
        assert_eq!(cpu.machine().pc(), 0x0001);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_load_is_not_cycle_charged() {
        let mut machine = setup();
        let mut cpu = Cpu::new(&mut machine);

        cpu.load(0xA9);
        cpu.load(0x05);

        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.machine().load_cursor(), 0x0002);
        assert_eq!(cpu.machine().pc(), 0x0000);
    }

    #[test]
    fn test_load_cursor_wraps_at_address_space_end() {
        let mut machine = setup();
        machine.load_cursor = 0xFFFF;

        let mut cpu = Cpu::new(&mut machine);
        cpu.load(0xAA);
        cpu.load(0xBB);

        assert_eq!(machine.memory().read(0xFFFF), 0xAA);
        assert_eq!(machine.memory().read(0x0000), 0xBB);
        assert_eq!(machine.load_cursor(), 0x0001);
    }

    #[test]
    fn test_reset_zeroes_cycle_counter() {
        let mut machine = setup();
        machine.memory_mut().write(0x0000, 0xE8); // INX

        let mut cpu = Cpu::new(&mut machine);
        cpu.run(2).unwrap();
        assert_eq!(cpu.cycles(), 2);

        cpu.reset();
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.machine().x(), 0x00);
        assert_eq!(cpu.machine().memory().read(0x0000), 0x00);
    }
}
