//! # Per-cycle Execution Engines
//!
//! One instruction in flight is a [`Context`]; each call to an engine
//! performs exactly one cycle's bus activity and returns the successor
//! context. Contexts are replaced, never mutated in place, so every cycle
//! transition is a plain value transformation that tests can drive one
//! step at a time.
//!
//! Two engines cover the modeled instruction set:
//!
//! - [`read_cycle`] resolves the operand address mode by mode and fetches
//!   the operand; the semantic operation fires on the final cycle.
//! - [`modify_cycle`] additionally writes the unmodified operand back
//!   before the result write - the 6502's observable double-write quirk -
//!   and has no page-cross shortcut on AbsoluteX.
//!
//! Cycle 1 of every instruction re-reads the opcode byte at PC and checks
//! it against the descriptor. Nothing may legally change memory or PC
//! under a mid-flight instruction, so a mismatch is the fatal
//! `PcDesynchronized` error rather than a condition to recover from.

use crate::cpu::CPU;
use crate::instructions;
use crate::opcodes::Opcode;
use crate::{AddressingMode, ExecutionError, MemoryBus};

/// One instruction's in-flight working state.
///
/// Created by the scheduler when an opcode is fetched, replaced by the
/// engine on every cycle, retired once `cycle` would exceed `total`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    /// Descriptor of the instruction being executed.
    pub op: &'static Opcode,

    /// Cycle index within the instruction, starting at 1 (opcode fetch).
    pub cycle: u8,

    /// Total cycles this instruction will take; `base_cycles` plus one if
    /// a page boundary crossing was detected mid-flight.
    pub total: u8,

    /// Low byte of the address under computation. Also holds zero-page
    /// pointer bytes while the indirect modes resolve.
    pub lo: u8,

    /// High byte of the address under computation. The indirect-indexed
    /// mode temporarily stashes the zero-page pointer address here while
    /// the pointer's low byte overwrites `lo`.
    pub hi: u8,

    /// Operand byte fetched from the bus (or from A in Accumulator mode).
    pub value: u8,

    /// Result byte a read-modify-write operation will write back.
    pub result: u8,
}

impl Context {
    /// Fresh context at cycle 1 for a newly fetched opcode.
    pub(crate) fn new(op: &'static Opcode) -> Self {
        Self {
            op,
            cycle: 1,
            total: op.base_cycles,
            lo: 0,
            hi: 0,
            value: 0,
            result: 0,
        }
    }

    /// The effective address assembled so far (little-endian lo/hi).
    pub(crate) fn address(&self) -> u16 {
        u16::from_le_bytes([self.lo, self.hi])
    }

    /// True once the instruction has used up all its cycles.
    pub(crate) fn complete(&self) -> bool {
        self.cycle > self.total
    }

    fn unknown_cycle(&self) -> ExecutionError {
        ExecutionError::UnknownCycle {
            mnemonic: self.op.mnemonic,
            mode: self.op.mode,
            cycle: self.cycle,
            total: self.total,
        }
    }
}

/// Re-reads the opcode byte at PC and advances past it.
///
/// Cycle 1 of every instruction on real hardware is the opcode fetch; the
/// scheduler already consumed the byte to pick the descriptor, so this
/// models the same bus read and doubles as a consistency check.
fn fetch_opcode<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &Context) -> Result<(), ExecutionError> {
    let found = cpu.memory.read(cpu.pc);
    if found != ctx.op.code {
        return Err(ExecutionError::PcDesynchronized {
            expected: ctx.op.code,
            found,
            pc: cpu.pc,
        });
    }
    cpu.pc = cpu.pc.wrapping_add(1);
    Ok(())
}

/// Runs one cycle of a plain-read instruction.
///
/// The returned context has its cycle index advanced; when that index
/// passes the (possibly page-cross-extended) total, the semantic
/// operation has already been applied.
pub(crate) fn read_cycle<M: MemoryBus>(
    cpu: &mut CPU<M>,
    ctx: Context,
) -> Result<Context, ExecutionError> {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Immediate, Implied, IndexedIndirect, IndirectIndexed,
        ZeroPage, ZeroPageX, ZeroPageY,
    };

    let mut next = ctx;
    next.cycle = ctx.cycle + 1;
    let mut page_cross = false;

    match (ctx.cycle, ctx.op.mode) {
        (1, _) => fetch_opcode(cpu, &ctx)?,

        (2, Immediate) => {
            next.value = cpu.memory.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
        }
        (2, Implied) => {
            // The hardware fetches the next byte anyway and throws it
            // away; PC does not advance.
            next.value = cpu.memory.read(cpu.pc);
        }
        (
            2,
            Absolute | ZeroPage | ZeroPageX | ZeroPageY | AbsoluteX | AbsoluteY | IndexedIndirect
            | IndirectIndexed,
        ) => {
            next.lo = cpu.memory.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
        }

        (3, Absolute | AbsoluteX | AbsoluteY) => {
            next.hi = cpu.memory.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
        }
        (3, ZeroPage) => {
            next.value = cpu.memory.read(u16::from(ctx.lo));
        }
        (3, ZeroPageX | IndexedIndirect) => {
            // Discarded read of the unindexed address while X is added.
            let _ = cpu.memory.read(u16::from(ctx.lo));
            next.lo = ctx.lo.wrapping_add(cpu.x);
        }
        (3, ZeroPageY) => {
            let _ = cpu.memory.read(u16::from(ctx.lo));
            next.lo = ctx.lo.wrapping_add(cpu.y);
        }
        (3, IndirectIndexed) => {
            // The zero-page pointer address moves to `hi` so the pointer's
            // low byte can take its place.
            next.hi = ctx.lo;
            next.lo = cpu.memory.read(u16::from(ctx.lo));
        }

        (4, Absolute | ZeroPageX | ZeroPageY) => {
            next.value = cpu.memory.read(ctx.address());
        }
        (4, AbsoluteX | AbsoluteY) => {
            let index = if ctx.op.mode == AbsoluteX { cpu.x } else { cpu.y };
            let (lo, crossed) = ctx.lo.overflowing_add(index);
            next.lo = lo;
            if crossed {
                // Page boundary crossed: the high byte is not corrected
                // until next cycle, so this read targets the wrong page.
                next.hi = ctx.hi.wrapping_add(1);
                next.value = cpu.memory.read(u16::from_le_bytes([lo, ctx.hi]));
                page_cross = true;
            } else {
                next.value = cpu.memory.read(u16::from_le_bytes([lo, ctx.hi]));
            }
        }
        (4, IndexedIndirect) => {
            // Pointer address moves to `hi`, pointer low byte into `lo`.
            next.hi = ctx.lo;
            next.lo = cpu.memory.read(u16::from(ctx.lo));
        }
        (4, IndirectIndexed) => {
            // Pointer high byte from zp+1, wrapping within page zero.
            next.hi = cpu.memory.read(u16::from(ctx.hi.wrapping_add(1)));
        }

        (5, AbsoluteX | AbsoluteY) => {
            // Corrected read after the page crossing.
            next.value = cpu.memory.read(ctx.address());
        }
        (5, IndexedIndirect) => {
            next.hi = cpu.memory.read(u16::from(ctx.hi.wrapping_add(1)));
        }
        (5, IndirectIndexed) => {
            let (lo, crossed) = ctx.lo.overflowing_add(cpu.y);
            next.lo = lo;
            if crossed {
                next.hi = ctx.hi.wrapping_add(1);
                next.value = cpu.memory.read(u16::from_le_bytes([lo, ctx.hi]));
                page_cross = true;
            } else {
                next.value = cpu.memory.read(u16::from_le_bytes([lo, ctx.hi]));
            }
        }

        (6, IndexedIndirect | IndirectIndexed) => {
            next.value = cpu.memory.read(ctx.address());
        }

        _ => return Err(ctx.unknown_cycle()),
    }

    if page_cross {
        next.total = ctx.total + 1;
    }

    if next.complete() {
        instructions::execute(cpu, &mut next)?;
    }

    Ok(next)
}

/// Runs one cycle of a read-modify-write instruction.
///
/// After the operand read, the unmodified value goes back out on the bus
/// (observable by memory-mapped devices), the semantic operation computes
/// the result, and a final cycle writes it. Accumulator mode does all its
/// work in cycle 2 with no memory traffic. AbsoluteX always pays the
/// address-correction cycle; write-class instructions cannot skip the
/// dummy read the way plain reads do.
pub(crate) fn modify_cycle<M: MemoryBus>(
    cpu: &mut CPU<M>,
    ctx: Context,
) -> Result<Context, ExecutionError> {
    use AddressingMode::{Absolute, AbsoluteX, Accumulator, ZeroPage, ZeroPageX};

    let mut next = ctx;
    next.cycle = ctx.cycle + 1;

    match (ctx.cycle, ctx.op.mode) {
        (1, Accumulator | ZeroPage | ZeroPageX | Absolute | AbsoluteX) => {
            fetch_opcode(cpu, &ctx)?;
        }

        (2, Accumulator) => {
            next.value = cpu.a;
            instructions::execute(cpu, &mut next)?;
            cpu.a = next.result;
        }
        (2, ZeroPage | ZeroPageX | Absolute | AbsoluteX) => {
            next.lo = cpu.memory.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
        }

        (3, Absolute | AbsoluteX) => {
            next.hi = cpu.memory.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
        }
        (3, ZeroPage) => {
            next.value = cpu.memory.read(u16::from(ctx.lo));
        }
        (3, ZeroPageX) => {
            // Internal index add; no bus access this cycle.
            next.lo = ctx.lo.wrapping_add(cpu.x);
        }

        (4, Absolute) => {
            next.value = cpu.memory.read(ctx.address());
        }
        (4, ZeroPage) => {
            // Redundant write of the original value while the result is
            // computed; the corrected byte lands next cycle.
            cpu.memory.write(u16::from(ctx.lo), ctx.value);
            instructions::execute(cpu, &mut next)?;
        }
        (4, ZeroPageX) => {
            next.value = cpu.memory.read(u16::from(ctx.lo));
        }
        (4, AbsoluteX) => {
            // Always a full correction cycle, page crossing or not: the
            // read targets the uncorrected page while the carry settles.
            let sum = u16::from(ctx.lo) + u16::from(cpu.x);
            next.lo = (sum & 0xFF) as u8;
            next.hi = ctx.hi.wrapping_add((sum >> 8) as u8);
            next.value = cpu.memory.read(u16::from_le_bytes([next.lo, ctx.hi]));
        }

        (5, Absolute) => {
            cpu.memory.write(ctx.address(), ctx.value);
            instructions::execute(cpu, &mut next)?;
        }
        (5, ZeroPage) => {
            cpu.memory.write(u16::from(ctx.lo), ctx.result);
        }
        (5, ZeroPageX) => {
            cpu.memory.write(u16::from(ctx.lo), ctx.value);
            instructions::execute(cpu, &mut next)?;
        }
        (5, AbsoluteX) => {
            next.value = cpu.memory.read(ctx.address());
        }

        (6, Absolute) => {
            cpu.memory.write(ctx.address(), ctx.result);
        }
        (6, ZeroPageX) => {
            cpu.memory.write(u16::from(ctx.lo), ctx.result);
        }
        (6, AbsoluteX) => {
            cpu.memory.write(ctx.address(), ctx.value);
            instructions::execute(cpu, &mut next)?;
        }

        (7, AbsoluteX) => {
            cpu.memory.write(ctx.address(), ctx.result);
        }

        _ => return Err(ctx.unknown_cycle()),
    }

    Ok(next)
}
