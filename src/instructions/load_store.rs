//! # Load and Store Instructions
//!
//! Loads pull the fetched operand into a register and set N/Z; stores put
//! a register out on the bus at the resolved address and touch no flags.

use crate::cpu::CPU;
use crate::execution::Context;
use crate::MemoryBus;

/// LDA - load the accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.a = ctx.value;
    cpu.p.update_nz(cpu.a);
}

/// LDX - load the X register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.x = ctx.value;
    cpu.p.update_nz(cpu.x);
}

/// LDY - load the Y register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.y = ctx.value;
    cpu.p.update_nz(cpu.y);
}

/// STA - store the accumulator. No flags change.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.memory.write(ctx.address(), cpu.a);
}

/// STX - store the X register. No flags change.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.memory.write(ctx.address(), cpu.x);
}

/// STY - store the Y register. No flags change.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.memory.write(ctx.address(), cpu.y);
}
