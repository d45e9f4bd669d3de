//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. The shifted-out bit lands in carry; ROL/ROR fold
//! the old carry in at the other end. The computed byte goes into
//! `ctx.result` for the engine to write back (or, in Accumulator mode,
//! to place in A).

use crate::cpu::CPU;
use crate::execution::Context;
use crate::status::C;
use crate::MemoryBus;

/// ASL - shift left one bit; bit 7 into carry, zero into bit 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let result = ctx.value << 1;
    cpu.p.set_if(C, ctx.value & 0x80 != 0);
    cpu.p.update_nz(result);
    ctx.result = result;
}

/// LSR - shift right one bit; bit 0 into carry, zero into bit 7.
///
/// N is always cleared since bit 7 of the result is always zero.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let result = ctx.value >> 1;
    cpu.p.set_if(C, ctx.value & 0x01 != 0);
    cpu.p.update_nz(result);
    ctx.result = result;
}

/// ROL - rotate left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let mut result = ctx.value << 1;
    if cpu.p.is_set(C) {
        result |= 0x01;
    }
    cpu.p.set_if(C, ctx.value & 0x80 != 0);
    cpu.p.update_nz(result);
    ctx.result = result;
}

/// ROR - rotate right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &mut Context) {
    let mut result = ctx.value >> 1;
    if cpu.p.is_set(C) {
        result |= 0x80;
    }
    cpu.p.set_if(C, ctx.value & 0x01 != 0);
    cpu.p.update_nz(result);
    ctx.result = result;
}
