//! # Semantic Operations
//!
//! One routine per mnemonic, grouped by category:
//!
//! - **alu**: ADC, SBC, CMP, CPX, CPY, AND, ORA, EOR, BIT
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **flags**: CLC, CLD, CLI, CLV, SEC, SED, SEI
//!
//! Each routine receives the completed execution context (operand value
//! and/or resolved address) and the CPU, mutates registers and flags, and
//! for the read-modify-write class leaves the computed byte in
//! `ctx.result` for the engine to write back.

mod alu;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod transfer;

use crate::cpu::CPU;
use crate::execution::Context;
use crate::opcodes::Mnemonic;
use crate::{ExecutionError, MemoryBus};

/// Dispatches the context's mnemonic to its semantic routine.
///
/// Only ADC/SBC can fail (decimal mode is unimplemented and fatal); every
/// other operation is infallible.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    ctx: &mut Context,
) -> Result<(), ExecutionError> {
    match ctx.op.mnemonic {
        Mnemonic::Adc => alu::adc(cpu, ctx)?,
        Mnemonic::Sbc => alu::sbc(cpu, ctx)?,
        Mnemonic::Cmp => alu::cmp(cpu, ctx),
        Mnemonic::Cpx => alu::cpx(cpu, ctx),
        Mnemonic::Cpy => alu::cpy(cpu, ctx),
        Mnemonic::And => alu::and(cpu, ctx),
        Mnemonic::Ora => alu::ora(cpu, ctx),
        Mnemonic::Eor => alu::eor(cpu, ctx),
        Mnemonic::Bit => alu::bit(cpu, ctx),

        Mnemonic::Lda => load_store::lda(cpu, ctx),
        Mnemonic::Ldx => load_store::ldx(cpu, ctx),
        Mnemonic::Ldy => load_store::ldy(cpu, ctx),
        Mnemonic::Sta => load_store::sta(cpu, ctx),
        Mnemonic::Stx => load_store::stx(cpu, ctx),
        Mnemonic::Sty => load_store::sty(cpu, ctx),

        Mnemonic::Asl => shifts::asl(cpu, ctx),
        Mnemonic::Lsr => shifts::lsr(cpu, ctx),
        Mnemonic::Rol => shifts::rol(cpu, ctx),
        Mnemonic::Ror => shifts::ror(cpu, ctx),

        Mnemonic::Inc => inc_dec::inc(cpu, ctx),
        Mnemonic::Dec => inc_dec::dec(cpu, ctx),
        Mnemonic::Inx => inc_dec::inx(cpu),
        Mnemonic::Iny => inc_dec::iny(cpu),
        Mnemonic::Dex => inc_dec::dex(cpu),
        Mnemonic::Dey => inc_dec::dey(cpu),

        Mnemonic::Tax => transfer::tax(cpu),
        Mnemonic::Tay => transfer::tay(cpu),
        Mnemonic::Txa => transfer::txa(cpu),
        Mnemonic::Tya => transfer::tya(cpu),
        Mnemonic::Tsx => transfer::tsx(cpu),
        Mnemonic::Txs => transfer::txs(cpu),

        Mnemonic::Clc => flags::clear(cpu, crate::status::C),
        Mnemonic::Cld => flags::clear(cpu, crate::status::D),
        Mnemonic::Cli => flags::clear(cpu, crate::status::I),
        Mnemonic::Clv => flags::clear(cpu, crate::status::V),
        Mnemonic::Sec => flags::set(cpu, crate::status::C),
        Mnemonic::Sed => flags::set(cpu, crate::status::D),
        Mnemonic::Sei => flags::set(cpu, crate::status::I),

        Mnemonic::Nop => {}
    }

    Ok(())
}
