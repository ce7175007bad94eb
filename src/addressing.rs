//! # Addressing Modes
//!
//! This module defines the addressing modes used by the implemented opcode
//! set. Each mode determines how many operand bytes an instruction consumes
//! and how the effective memory address is calculated.
//!
//! Modes with no operand bytes (register-only instructions such as INX) have
//! no entry here; their handlers never resolve an address.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation. The index register involved in an indexed mode is part
/// of the variant, so resolution needs no extra parameter.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page).
    /// The index addition always costs one extra cycle.
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from 0x0080 + Y, wraps within zero page).
    /// The index addition always costs one extra cycle.
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234 (load from address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X).
    /// Incurs a one-cycle dummy read when the indexed low byte wraps past
    /// 0xFF into the next page.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y).
    /// Same page-crossing penalty as `AbsoluteX`.
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) - add X to 0x40 within zero page, read a 16-bit
    /// pointer from that location, operate on the pointed-to address.
    /// Always charges a one-cycle dummy read at the unindexed pointer.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y - read a 16-bit pointer from zero page 0x40,
    /// add Y, operate on the result. Incurs the page-crossing penalty when
    /// the addition wraps the low byte.
    IndirectY,
}
