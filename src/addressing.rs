//! # Addressing Modes
//!
//! The 13 ways a 6502 instruction can name its operand. The addressing
//! mode, together with the cycle index, selects the bus operation the
//! execution engine performs on each tick.

/// 6502 addressing mode enumeration.
///
/// Determines how the bytes following an opcode are interpreted and how
/// the effective address is computed cycle by cycle.
///
/// Operand sizes:
/// - 0 bytes: `Implied`, `Accumulator`
/// - 1 byte: `Immediate`, zero-page modes, `Relative`, the indirect modes
/// - 2 bytes: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the byte after the opcode is fetched and discarded.
    ///
    /// Examples: TAX, CLC, NOP
    Implied,

    /// Operates directly on the accumulator, with no memory traffic.
    ///
    /// Examples: ASL A, ROR A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address within page zero (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address indexed by X; wraps within page zero.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address indexed by Y; wraps within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit PC-relative offset, used by branches.
    ///
    /// No branch instructions are in the modeled set yet; the variant
    /// exists so descriptors stay a closed, complete enumeration.
    Relative,

    /// Full 16-bit address, little-endian after the opcode.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Crossing a page boundary costs one extra cycle on read-class
    /// instructions. Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Crossing a page boundary costs one extra cycle on read-class
    /// instructions. Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer; only JMP uses it (not yet modeled).
    Indirect,

    /// Indexed indirect: add X to the zero-page operand, then read the
    /// 16-bit pointer from there.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,

    /// Indirect indexed: read the 16-bit pointer at the zero-page operand,
    /// then add Y. Page crossing costs an extra cycle.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexed,
}
