//! # Increment and Decrement Instructions
//!
//! Memory forms (INC/DEC) run under the read-modify-write engine and
//! leave their result in the context for write-back; register forms
//! (INX/INY/DEX/DEY) mutate X or Y directly. All wrap modulo 256 and set
//! N/Z from the new value.

use crate::cpu::CPU;
use crate::execution::Context;
use crate::MemoryBus;

/// INC - increment the addressed memory byte.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let result = ctx.value.wrapping_add(1);
    cpu.p.update_nz(result);
    ctx.result = result;
}

/// DEC - decrement the addressed memory byte.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let result = ctx.value.wrapping_sub(1);
    cpu.p.update_nz(result);
    ctx.result = result;
}

/// INX - increment X.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_nz(cpu.x);
}

/// INY - increment Y.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_nz(cpu.y);
}

/// DEX - decrement X.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_nz(cpu.x);
}

/// DEY - decrement Y.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_nz(cpu.y);
}
