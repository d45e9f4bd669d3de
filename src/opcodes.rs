//! # Opcode Descriptor Table
//!
//! The single source of truth for every opcode this core models: its
//! mnemonic, addressing mode, base cycle count, encoded length and which
//! of the two execution engines runs it.
//!
//! The table is built once at compile time and never mutated. Bytes
//! without an entry are opcodes the core deliberately does not model
//! (illegal opcodes, interrupts, stack ops, control flow); fetching one is
//! the fatal [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError)
//! condition, never a silent no-op.

use crate::addressing::AddressingMode;

/// Instruction mnemonic, a closed enumeration of the modeled operations.
///
/// Dispatch to the semantic routine happens through a single `match` on
/// this tag (see [`crate::instructions`]) rather than through function
/// pointers, keeping the descriptor table plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bit,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Rol,
    Ror,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// The conventional three-letter assembly spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bit => "BIT",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which per-cycle engine executes an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Plain-read sequencing: resolve the address, fetch the operand, run
    /// the semantic operation on the final cycle. Used by loads, stores,
    /// arithmetic, compares, logic, bit-test, flag and transfer ops, NOP.
    Read,

    /// Read-modify-write sequencing: fetch the operand, write the
    /// unmodified value back (the hardware's redundant write), compute,
    /// then write the result. Used by ASL/LSR/ROL/ROR/INC/DEC.
    ReadModifyWrite,
}

/// Immutable descriptor for one legal opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// The opcode byte itself, re-checked against memory on cycle 1.
    pub code: u8,

    /// Operation this opcode performs.
    pub mnemonic: Mnemonic,

    /// How the operand address is formed.
    pub mode: AddressingMode,

    /// Base total cycle count; page crossing may extend it by one at
    /// runtime, in the in-flight context only.
    pub base_cycles: u8,

    /// Encoded instruction length in bytes (1-3).
    pub size_bytes: u8,

    /// Execution engine variant.
    pub engine: Engine,
}

const fn entry(
    code: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
    engine: Engine,
) -> Option<Opcode> {
    Some(Opcode {
        code,
        mnemonic,
        mode,
        base_cycles,
        size_bytes,
        engine,
    })
}

const fn read(
    code: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> Option<Opcode> {
    entry(code, mnemonic, mode, base_cycles, size_bytes, Engine::Read)
}

const fn rmw(
    code: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> Option<Opcode> {
    entry(
        code,
        mnemonic,
        mode,
        base_cycles,
        size_bytes,
        Engine::ReadModifyWrite,
    )
}

/// 256-entry descriptor table indexed by opcode byte.
///
/// `None` marks bytes the core does not model. Built once at compile time;
/// the scheduler and engines only ever read it.
///
/// # Examples
///
/// ```
/// use cycle6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].as_ref().unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// // 0x02 is an illegal opcode: no entry
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

#[allow(clippy::too_many_lines)]
const fn build_table() -> [Option<Opcode>; 256] {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirect,
        IndirectIndexed, ZeroPage, ZeroPageX, ZeroPageY,
    };
    use Mnemonic::{
        Adc, And, Asl, Bit, Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny,
        Lda, Ldx, Ldy, Lsr, Nop, Ora, Rol, Ror, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx,
        Txa, Txs, Tya,
    };

    let mut t: [Option<Opcode>; 256] = [None; 256];

    // ADC
    t[0x69] = read(0x69, Adc, Immediate, 2, 2);
    t[0x65] = read(0x65, Adc, ZeroPage, 3, 2);
    t[0x75] = read(0x75, Adc, ZeroPageX, 4, 2);
    t[0x6D] = read(0x6D, Adc, Absolute, 4, 3);
    t[0x7D] = read(0x7D, Adc, AbsoluteX, 4, 3);
    t[0x79] = read(0x79, Adc, AbsoluteY, 4, 3);
    t[0x61] = read(0x61, Adc, IndexedIndirect, 6, 2);
    t[0x71] = read(0x71, Adc, IndirectIndexed, 5, 2);

    // SBC
    t[0xE9] = read(0xE9, Sbc, Immediate, 2, 2);
    t[0xE5] = read(0xE5, Sbc, ZeroPage, 3, 2);
    t[0xF5] = read(0xF5, Sbc, ZeroPageX, 4, 2);
    t[0xED] = read(0xED, Sbc, Absolute, 4, 3);
    t[0xFD] = read(0xFD, Sbc, AbsoluteX, 4, 3);
    t[0xF9] = read(0xF9, Sbc, AbsoluteY, 4, 3);
    t[0xE1] = read(0xE1, Sbc, IndexedIndirect, 6, 2);
    t[0xF1] = read(0xF1, Sbc, IndirectIndexed, 5, 2);

    // CMP
    t[0xC9] = read(0xC9, Cmp, Immediate, 2, 2);
    t[0xC5] = read(0xC5, Cmp, ZeroPage, 3, 2);
    t[0xD5] = read(0xD5, Cmp, ZeroPageX, 4, 2);
    t[0xCD] = read(0xCD, Cmp, Absolute, 4, 3);
    t[0xDD] = read(0xDD, Cmp, AbsoluteX, 4, 3);
    t[0xD9] = read(0xD9, Cmp, AbsoluteY, 4, 3);
    t[0xC1] = read(0xC1, Cmp, IndexedIndirect, 6, 2);
    t[0xD1] = read(0xD1, Cmp, IndirectIndexed, 5, 2);

    // CPX / CPY
    t[0xE0] = read(0xE0, Cpx, Immediate, 2, 2);
    t[0xE4] = read(0xE4, Cpx, ZeroPage, 3, 2);
    t[0xEC] = read(0xEC, Cpx, Absolute, 4, 3);
    t[0xC0] = read(0xC0, Cpy, Immediate, 2, 2);
    t[0xC4] = read(0xC4, Cpy, ZeroPage, 3, 2);
    t[0xCC] = read(0xCC, Cpy, Absolute, 4, 3);

    // AND
    t[0x29] = read(0x29, And, Immediate, 2, 2);
    t[0x25] = read(0x25, And, ZeroPage, 3, 2);
    t[0x35] = read(0x35, And, ZeroPageX, 4, 2);
    t[0x2D] = read(0x2D, And, Absolute, 4, 3);
    t[0x3D] = read(0x3D, And, AbsoluteX, 4, 3);
    t[0x39] = read(0x39, And, AbsoluteY, 4, 3);
    t[0x21] = read(0x21, And, IndexedIndirect, 6, 2);
    t[0x31] = read(0x31, And, IndirectIndexed, 5, 2);

    // ORA
    t[0x09] = read(0x09, Ora, Immediate, 2, 2);
    t[0x05] = read(0x05, Ora, ZeroPage, 3, 2);
    t[0x15] = read(0x15, Ora, ZeroPageX, 4, 2);
    t[0x0D] = read(0x0D, Ora, Absolute, 4, 3);
    t[0x1D] = read(0x1D, Ora, AbsoluteX, 4, 3);
    t[0x19] = read(0x19, Ora, AbsoluteY, 4, 3);
    t[0x01] = read(0x01, Ora, IndexedIndirect, 6, 2);
    t[0x11] = read(0x11, Ora, IndirectIndexed, 5, 2);

    // EOR
    t[0x49] = read(0x49, Eor, Immediate, 2, 2);
    t[0x45] = read(0x45, Eor, ZeroPage, 3, 2);
    t[0x55] = read(0x55, Eor, ZeroPageX, 4, 2);
    t[0x4D] = read(0x4D, Eor, Absolute, 4, 3);
    t[0x5D] = read(0x5D, Eor, AbsoluteX, 4, 3);
    t[0x59] = read(0x59, Eor, AbsoluteY, 4, 3);
    t[0x41] = read(0x41, Eor, IndexedIndirect, 6, 2);
    t[0x51] = read(0x51, Eor, IndirectIndexed, 5, 2);

    // BIT
    t[0x24] = read(0x24, Bit, ZeroPage, 3, 2);
    t[0x2C] = read(0x2C, Bit, Absolute, 4, 3);

    // LDA
    t[0xA9] = read(0xA9, Lda, Immediate, 2, 2);
    t[0xA5] = read(0xA5, Lda, ZeroPage, 3, 2);
    t[0xB5] = read(0xB5, Lda, ZeroPageX, 4, 2);
    t[0xAD] = read(0xAD, Lda, Absolute, 4, 3);
    t[0xBD] = read(0xBD, Lda, AbsoluteX, 4, 3);
    t[0xB9] = read(0xB9, Lda, AbsoluteY, 4, 3);
    t[0xA1] = read(0xA1, Lda, IndexedIndirect, 6, 2);
    t[0xB1] = read(0xB1, Lda, IndirectIndexed, 5, 2);

    // LDX
    t[0xA2] = read(0xA2, Ldx, Immediate, 2, 2);
    t[0xA6] = read(0xA6, Ldx, ZeroPage, 3, 2);
    t[0xB6] = read(0xB6, Ldx, ZeroPageY, 4, 2);
    t[0xAE] = read(0xAE, Ldx, Absolute, 4, 3);
    t[0xBE] = read(0xBE, Ldx, AbsoluteY, 4, 3);

    // LDY
    t[0xA0] = read(0xA0, Ldy, Immediate, 2, 2);
    t[0xA4] = read(0xA4, Ldy, ZeroPage, 3, 2);
    t[0xB4] = read(0xB4, Ldy, ZeroPageX, 4, 2);
    t[0xAC] = read(0xAC, Ldy, Absolute, 4, 3);
    t[0xBC] = read(0xBC, Ldy, AbsoluteX, 4, 3);

    // STA - runs the plain-read engine; the final operand read doubles as
    // the address-settling cycle and the store lands when the semantic op
    // fires (see execution.rs).
    t[0x85] = read(0x85, Sta, ZeroPage, 3, 2);
    t[0x95] = read(0x95, Sta, ZeroPageX, 4, 2);
    t[0x8D] = read(0x8D, Sta, Absolute, 4, 3);
    t[0x9D] = read(0x9D, Sta, AbsoluteX, 4, 3);
    t[0x99] = read(0x99, Sta, AbsoluteY, 4, 3);
    t[0x81] = read(0x81, Sta, IndexedIndirect, 6, 2);
    t[0x91] = read(0x91, Sta, IndirectIndexed, 5, 2);

    // STX / STY
    t[0x86] = read(0x86, Stx, ZeroPage, 3, 2);
    t[0x96] = read(0x96, Stx, ZeroPageY, 4, 2);
    t[0x8E] = read(0x8E, Stx, Absolute, 4, 3);
    t[0x84] = read(0x84, Sty, ZeroPage, 3, 2);
    t[0x94] = read(0x94, Sty, ZeroPageX, 4, 2);
    t[0x8C] = read(0x8C, Sty, Absolute, 4, 3);

    // Register transfers
    t[0xAA] = read(0xAA, Tax, Implied, 2, 1);
    t[0xA8] = read(0xA8, Tay, Implied, 2, 1);
    t[0x8A] = read(0x8A, Txa, Implied, 2, 1);
    t[0x98] = read(0x98, Tya, Implied, 2, 1);
    t[0xBA] = read(0xBA, Tsx, Implied, 2, 1);
    t[0x9A] = read(0x9A, Txs, Implied, 2, 1);

    // Register increment/decrement
    t[0xE8] = read(0xE8, Inx, Implied, 2, 1);
    t[0xC8] = read(0xC8, Iny, Implied, 2, 1);
    t[0xCA] = read(0xCA, Dex, Implied, 2, 1);
    t[0x88] = read(0x88, Dey, Implied, 2, 1);

    // Flag instructions
    t[0x18] = read(0x18, Clc, Implied, 2, 1);
    t[0x38] = read(0x38, Sec, Implied, 2, 1);
    t[0x58] = read(0x58, Cli, Implied, 2, 1);
    t[0x78] = read(0x78, Sei, Implied, 2, 1);
    t[0xB8] = read(0xB8, Clv, Implied, 2, 1);
    t[0xD8] = read(0xD8, Cld, Implied, 2, 1);
    t[0xF8] = read(0xF8, Sed, Implied, 2, 1);

    // NOP
    t[0xEA] = read(0xEA, Nop, Implied, 2, 1);

    // ASL
    t[0x0A] = rmw(0x0A, Asl, Accumulator, 2, 1);
    t[0x06] = rmw(0x06, Asl, ZeroPage, 5, 2);
    t[0x16] = rmw(0x16, Asl, ZeroPageX, 6, 2);
    t[0x0E] = rmw(0x0E, Asl, Absolute, 6, 3);
    t[0x1E] = rmw(0x1E, Asl, AbsoluteX, 7, 3);

    // LSR
    t[0x4A] = rmw(0x4A, Lsr, Accumulator, 2, 1);
    t[0x46] = rmw(0x46, Lsr, ZeroPage, 5, 2);
    t[0x56] = rmw(0x56, Lsr, ZeroPageX, 6, 2);
    t[0x4E] = rmw(0x4E, Lsr, Absolute, 6, 3);
    t[0x5E] = rmw(0x5E, Lsr, AbsoluteX, 7, 3);

    // ROL
    t[0x2A] = rmw(0x2A, Rol, Accumulator, 2, 1);
    t[0x26] = rmw(0x26, Rol, ZeroPage, 5, 2);
    t[0x36] = rmw(0x36, Rol, ZeroPageX, 6, 2);
    t[0x2E] = rmw(0x2E, Rol, Absolute, 6, 3);
    t[0x3E] = rmw(0x3E, Rol, AbsoluteX, 7, 3);

    // ROR
    t[0x6A] = rmw(0x6A, Ror, Accumulator, 2, 1);
    t[0x66] = rmw(0x66, Ror, ZeroPage, 5, 2);
    t[0x76] = rmw(0x76, Ror, ZeroPageX, 6, 2);
    t[0x6E] = rmw(0x6E, Ror, Absolute, 6, 3);
    t[0x7E] = rmw(0x7E, Ror, AbsoluteX, 7, 3);

    // INC / DEC
    t[0xE6] = rmw(0xE6, Inc, ZeroPage, 5, 2);
    t[0xF6] = rmw(0xF6, Inc, ZeroPageX, 6, 2);
    t[0xEE] = rmw(0xEE, Inc, Absolute, 6, 3);
    t[0xFE] = rmw(0xFE, Inc, AbsoluteX, 7, 3);
    t[0xC6] = rmw(0xC6, Dec, ZeroPage, 5, 2);
    t[0xD6] = rmw(0xD6, Dec, ZeroPageX, 6, 2);
    t[0xCE] = rmw(0xCE, Dec, Absolute, 6, 3);
    t[0xDE] = rmw(0xDE, Dec, AbsoluteX, 7, 3);

    t
}
