//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the machine
//! state from a specific memory implementation. This enables flexible memory
//! configurations:
//!
//! - Flat 64KB RAM (FlatMemory implementation provided)
//! - ROM/RAM splits
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored

/// Memory bus trait for reading and writing bytes.
///
/// Implementations of this trait provide the memory backend for a
/// [`Machine`](crate::Machine). The execution engine touches memory only
/// through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching 6502 hardware
    /// behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or
    /// unmapped, implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Zeroes every addressable cell.
    ///
    /// Called by [`Machine::reset`](crate::Machine::reset). The default
    /// implementation writes 0x00 across the whole address space;
    /// implementations with a backing array should override it with a fill.
    fn clear(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array,
/// so every 16-bit address is valid and writable. Useful for testing and for
/// programs that need no ROM/RAM distinction.
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus};
///
/// let mem = FlatMemory::new();
/// // All memory initially zero
/// assert_eq!(mem.read(0x0000), 0x00);
/// assert_eq!(mem.read(0xFFFF), 0x00);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn clear(&mut self) {
        self.data.fill(0x00);
    }
}
