//! # cycle6502
//!
//! A cycle-accurate MOS 6502 CPU core. Every call to [`CPU::tick`]
//! performs exactly one clock cycle's worth of bus activity - including
//! the throwaway reads of page-boundary crossings and the redundant
//! first write of read-modify-write instructions - so memory-mapped
//! devices elsewhere in the emulated machine observe the same access
//! sequence real silicon produces.
//!
//! ## Quick start
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x0000, &[
//!     0xA9, 0x01, // LDA #$01
//!     0x69, 0x7F, // ADC #$7F
//! ]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.step().unwrap(); // LDA
//! cpu.step().unwrap(); // ADC
//!
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_n());
//! assert!(cpu.flag_v());
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - [`opcodes::OPCODE_TABLE`] maps each legal opcode byte to an
//!   immutable descriptor: mnemonic, addressing mode, cycle count,
//!   length and engine variant.
//! - `execution` (internal) holds the two per-cycle addressing engines
//!   (plain-read and read-modify-write) driving an in-flight execution
//!   context one bus access at a time.
//! - `instructions` (internal) implements the semantic operation for
//!   each mnemonic, dispatched through a single `match`.
//! - [`cpu::CPU`] owns the registers and schedules all of the above from
//!   its single-cycle `tick()` entry point.
//!
//! Interrupts, stack operations, control flow and decimal-mode
//! arithmetic are not modeled; decimal-mode ADC/SBC and unknown opcodes
//! fail loudly rather than computing something subtly wrong.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

mod execution;
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Engine, Mnemonic, Opcode, OPCODE_TABLE};
pub use status::Status;

/// Fatal conditions that terminate emulation.
///
/// None of these are recoverable: each one means either a program byte
/// the core cannot model or a caller bug, and the owning process is
/// expected to stop or restart emulation. After any of them, further
/// `tick()` calls make no guarantees about producing valid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no descriptor in the opcode table. The core
    /// cannot guess an unmodeled instruction's timing or semantics.
    UnimplementedOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Program counter it was fetched from.
        pc: u16,
    },

    /// ADC or SBC executed with the decimal flag set. BCD arithmetic is
    /// unimplemented and silently computing the binary result would
    /// corrupt flag semantics.
    DecimalModeUnsupported {
        /// The instruction that hit the check.
        mnemonic: Mnemonic,
    },

    /// The opcode byte re-read on cycle 1 does not match the in-flight
    /// descriptor: something mutated memory or PC mid-instruction.
    PcDesynchronized {
        /// Opcode recorded in the descriptor.
        expected: u8,
        /// Byte actually read from memory.
        found: u8,
        /// Program counter of the mismatch.
        pc: u16,
    },

    /// The engine reached a (cycle, addressing mode) pair it has no rule
    /// for - an opcode-table data-entry error such as a wrong cycle
    /// count.
    UnknownCycle {
        /// Instruction being executed.
        mnemonic: Mnemonic,
        /// Its addressing mode.
        mode: AddressingMode,
        /// Cycle index that had no rule.
        cycle: u8,
        /// The instruction's (possibly extended) total cycle count.
        total: u8,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode { opcode, pc } => {
                write!(f, "unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X}")
            }
            ExecutionError::DecimalModeUnsupported { mnemonic } => {
                write!(f, "{mnemonic} executed with decimal flag set; BCD arithmetic is unimplemented")
            }
            ExecutionError::PcDesynchronized { expected, found, pc } => {
                write!(
                    f,
                    "PC desynchronized at 0x{pc:04X}: descriptor opcode 0x{expected:02X} but memory reads 0x{found:02X}"
                )
            }
            ExecutionError::UnknownCycle {
                mnemonic,
                mode,
                cycle,
                total,
            } => {
                write!(
                    f,
                    "no engine rule for {mnemonic} ({mode:?}) at cycle {cycle}/{total}"
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
