//! # Register Transfer Instructions
//!
//! Copy one register into another. Every transfer updates N/Z from the
//! copied value except TXS: the stack pointer is not an ALU destination
//! on real hardware, so the flags ride through untouched.

use crate::cpu::CPU;
use crate::MemoryBus;

/// TAX - copy A into X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.p.update_nz(cpu.x);
}

/// TAY - copy A into Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.p.update_nz(cpu.y);
}

/// TXA - copy X into A.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.p.update_nz(cpu.a);
}

/// TYA - copy Y into A.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.p.update_nz(cpu.a);
}

/// TSX - copy the stack pointer into X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.s;
    cpu.p.update_nz(cpu.x);
}

/// TXS - copy X into the stack pointer. Flags unchanged.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.s = cpu.x;
}
