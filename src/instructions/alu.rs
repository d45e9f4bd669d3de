//! # ALU Instructions
//!
//! Arithmetic, compare, logic and bit-test operations. All of the
//! arithmetic flows through one binary adder, the way the silicon's does:
//! SBC is ADC of the one's complement, and the compares are SBC with
//! carry forced high and the sum discarded.

use crate::cpu::CPU;
use crate::execution::Context;
use crate::status::{C, D, N, V, Z};
use crate::{ExecutionError, MemoryBus};

/// Full adder output: result byte plus the four flags it determines.
struct Sum {
    value: u8,
    carry: bool,
    zero: bool,
    negative: bool,
    overflow: bool,
}

/// Binary add of `operand` + `register` + carry-in.
///
/// Overflow is the standard two's-complement test: the sign bit of
/// `(register ^ value) & (operand ^ value)`.
fn binary_adc(operand: u8, register: u8, carry: bool) -> Sum {
    let sum = u16::from(register) + u16::from(operand) + u16::from(carry);
    let value = (sum & 0xFF) as u8;

    Sum {
        value,
        carry: sum > 0xFF,
        zero: value == 0,
        negative: value & 0x80 != 0,
        overflow: (register ^ value) & (operand ^ value) & 0x80 != 0,
    }
}

fn apply_arithmetic_flags<M: MemoryBus>(cpu: &mut CPU<M>, sum: &Sum) {
    cpu.p.set_if(C, sum.carry);
    cpu.p.set_if(Z, sum.zero);
    cpu.p.set_if(N, sum.negative);
    cpu.p.set_if(V, sum.overflow);
}

/// ADC - add operand and carry to the accumulator.
///
/// Only binary arithmetic is modeled; with the decimal flag set this is
/// the fatal `DecimalModeUnsupported` error instead of a silently wrong
/// binary result.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) -> Result<(), ExecutionError> {
    if cpu.p.is_set(D) {
        return Err(ExecutionError::DecimalModeUnsupported {
            mnemonic: ctx.op.mnemonic,
        });
    }

    let sum = binary_adc(ctx.value, cpu.a, cpu.p.is_set(C));
    cpu.a = sum.value;
    apply_arithmetic_flags(cpu, &sum);
    Ok(())
}

/// SBC - subtract operand from the accumulator with borrow.
///
/// Runs the same adder as ADC with the operand's bits inverted.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) -> Result<(), ExecutionError> {
    if cpu.p.is_set(D) {
        return Err(ExecutionError::DecimalModeUnsupported {
            mnemonic: ctx.op.mnemonic,
        });
    }

    let sum = binary_adc(ctx.value ^ 0xFF, cpu.a, cpu.p.is_set(C));
    cpu.a = sum.value;
    apply_arithmetic_flags(cpu, &sum);
    Ok(())
}

/// Shared compare: subtract with carry forced high, discard the result.
///
/// Carry set afterwards means `register >= operand` (unsigned); overflow
/// is untouched.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: u8) {
    let sum = binary_adc(operand ^ 0xFF, register, true);
    cpu.p.set_if(C, sum.carry);
    cpu.p.set_if(Z, sum.zero);
    cpu.p.set_if(N, sum.negative);
}

/// CMP - compare accumulator with operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    compare(cpu, cpu.a, ctx.value);
}

/// CPX - compare X with operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    compare(cpu, cpu.x, ctx.value);
}

/// CPY - compare Y with operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    compare(cpu, cpu.y, ctx.value);
}

/// AND - bitwise AND into the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.a &= ctx.value;
    cpu.p.update_nz(cpu.a);
}

/// ORA - bitwise OR into the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.a |= ctx.value;
    cpu.p.update_nz(cpu.a);
}

/// EOR - bitwise exclusive OR into the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.a ^= ctx.value;
    cpu.p.update_nz(cpu.a);
}

/// BIT - test operand bits against the accumulator.
///
/// N and V come straight from bits 7 and 6 of the operand itself; Z from
/// ANDing it with the accumulator. The accumulator is unchanged.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) {
    cpu.p.set_if(N, ctx.value & 0x80 != 0);
    cpu.p.set_if(V, ctx.value & 0x40 != 0);
    cpu.p.set_if(Z, cpu.a & ctx.value == 0);
}
