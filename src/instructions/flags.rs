//! # Flag Instructions
//!
//! CLC/CLD/CLI/CLV and SEC/SED/SEI: set or clear exactly one status flag,
//! touching nothing else. (There is no SEV; the overflow flag can only be
//! set by arithmetic or cleared by CLV.)

use crate::cpu::CPU;
use crate::MemoryBus;

/// Clears a single status flag.
pub(crate) fn clear<M: MemoryBus>(cpu: &mut CPU<M>, flag: u8) {
    cpu.p.clear(flag);
}

/// Sets a single status flag.
pub(crate) fn set<M: MemoryBus>(cpu: &mut CPU<M>, flag: u8) {
    cpu.p.set(flag);
}
