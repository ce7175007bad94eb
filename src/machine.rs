//! # Machine State
//!
//! This module contains the `Machine` struct: the complete processor state
//! an execution engine operates on.
//!
//! The machine holds:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: C, Z, I, D, B, V, N (individual bool fields)
//! - **Memory**: the full 16-bit address space behind the `MemoryBus` trait
//! - **Load cursor**: write position for bootstrap program loading,
//!   independent of the program counter
//!
//! `Machine` is pure data. The only mutating operation it exposes directly
//! is [`Machine::reset`]; all other mutation flows through the execution
//! engine in [`crate::cpu`]. Each machine is a plain owned value, so hosting
//! several independent machines is just a matter of constructing several
//! values.

use std::fmt;

use crate::memory::MemoryBus;

/// Complete 6502 machine state.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, Machine};
///
/// let machine = Machine::new(FlatMemory::new());
///
/// // Power-on state
/// assert_eq!(machine.pc(), 0x0000);
/// assert_eq!(machine.sp(), 0xFF);
/// assert_eq!(machine.a(), 0x00);
/// assert!(!machine.flag_z());
/// ```
pub struct Machine<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address).
    /// Reserved for push/pull/call instructions; the implemented opcode set
    /// never touches it.
    pub(crate) sp: u8,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Break flag (set when BRK instruction executed)
    pub(crate) flag_b: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Write cursor for bootstrap loading, independent of `pc`
    pub(crate) load_cursor: u16,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Machine<M> {
    /// Creates a new machine around the given memory bus.
    ///
    /// Registers, flags, the program counter and the load cursor start in
    /// the reset state (everything zero, SP = 0xFF). The supplied memory is
    /// taken as-is so callers can pre-image it; only an explicit
    /// [`reset`](Machine::reset) zeroes memory.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            load_cursor: 0x0000,
            memory,
        }
    }

    /// Restores the machine to its reset invariant, unconditionally.
    ///
    /// All memory is zeroed, all flags cleared, all registers zeroed,
    /// PC = 0x0000, SP = 0xFF, load cursor back at 0x0000. There is no
    /// error path.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = 0x0000;
        self.sp = 0xFF;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
        self.load_cursor = 0x0000;
        self.memory.clear();
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward
    /// from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the bootstrap load cursor position.
    pub fn load_cursor(&self) -> u16 {
        self.load_cursor
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Setters (test scaffolding and external drivers) ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Intended for pre-imaging memory in tests and bootstrap code; during
    /// execution all memory traffic goes through the engine so it can be
    /// cycle-charged.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

/// Diagnostic dump of the registers and flags, one register per line.
impl<M: MemoryBus> fmt::Display for Machine<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "A:  {}", self.a)?;
        writeln!(f, "X:  {}", self.x)?;
        writeln!(f, "Y:  {}", self.y)?;
        write!(
            f,
            "C:{}  Z:{}  I:{}  D:{}  B:{}  V:{}  N:{}",
            u8::from(self.flag_c),
            u8::from(self.flag_z),
            u8::from(self.flag_i),
            u8::from(self.flag_d),
            u8::from(self.flag_b),
            u8::from(self.flag_v),
            u8::from(self.flag_n),
        )
    }
}
