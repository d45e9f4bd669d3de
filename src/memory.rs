//! # Memory Bus Abstraction
//!
//! The CPU core never owns memory; it talks to an external collaborator
//! through the [`MemoryBus`] trait. This keeps the core independent of the
//! surrounding machine's memory map (RAM/ROM splits, memory-mapped I/O,
//! banking) and lets tests substitute instrumented buses that record every
//! access.
//!
//! Because the engine performs exactly one bus operation per cycle,
//! implementations can observe intermediate accesses - including the
//! throwaway reads and the redundant write of read-modify-write
//! instructions - in the same order real silicon would issue them.

/// Byte-addressable bus the CPU reads from and writes to.
///
/// The full 16-bit address space (65536 bytes) must be addressable. The
/// 6502 has no bus-error mechanism, so neither method can fail: unmapped
/// reads may return garbage and writes to read-only regions may be
/// silently dropped, exactly as the hardware behaves.
///
/// # Examples
///
/// ```
/// use cycle6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    ///
    /// Must not panic, whatever the address.
    fn read(&self, addr: u16) -> u8;

    /// Writes `value` to `addr`.
    ///
    /// Must not panic, whatever the address.
    fn write(&mut self, addr: u16, value: u8);
}

/// Flat 64KB RAM covering the whole address space.
///
/// Every address is writable and initialized to zero. Intended for tests
/// and simple machines without a memory map.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0000, 0xA9); // LDA #$01
/// mem.write(0x0001, 0x01);
///
/// let mut cpu = CPU::new(mem);
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x01);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous backing store, boxed to keep the CPU struct small.
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a zero-filled 64KB memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `program` into memory starting at `origin`.
    ///
    /// Wraps around the top of the address space, matching how the CPU's
    /// own address arithmetic wraps.
    pub fn load(&mut self, origin: u16, program: &[u8]) {
        for (offset, &byte) in program.iter().enumerate() {
            let addr = origin.wrapping_add(offset as u16);
            self.data[addr as usize] = byte;
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
}
