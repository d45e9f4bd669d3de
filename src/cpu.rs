//! # CPU Scheduler
//!
//! The [`CPU`] struct owns the processor registers, the flag set and the
//! in-flight execution context, and exposes the single-cycle [`CPU::tick`]
//! entry point the rest of the emulated machine drives.
//!
//! ## Execution model
//!
//! The scheduler is a two-state machine:
//!
//! - **FetchOpcode** (no context in flight): the next `tick()` reads the
//!   opcode byte at PC, looks up its descriptor and starts a fresh
//!   context at cycle 1.
//! - **RunInstruction** (context in flight): each `tick()` hands the
//!   context to the descriptor's engine for one cycle of bus activity.
//!
//! Either way, exactly one engine cycle runs per `tick()` - the opcode
//! fetch itself is cycle 1 of the instruction, as on real hardware. When
//! the returned context's cycle index passes its total, the instruction
//! has retired and the scheduler is back in fetch state.

use crate::execution::{self, Context};
use crate::opcodes::{Engine, OPCODE_TABLE};
use crate::status::Status;
use crate::{ExecutionError, MemoryBus};

/// The 6502 CPU core.
///
/// Generic over its [`MemoryBus`] so the surrounding machine supplies the
/// memory map. All register state is inspectable, and mutable through
/// explicit setters for test setup and debugger use.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0000, &[0xA9, 0x80]); // LDA #$80
///
/// let mut cpu = CPU::new(mem);
/// cpu.tick().unwrap(); // cycle 1: opcode fetch
/// cpu.tick().unwrap(); // cycle 2: operand fetch + execute
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert_eq!(cpu.pc(), 0x0002);
/// assert!(cpu.is_instruction_boundary());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Stack pointer (byte offset within page 1).
    pub(crate) s: u8,

    /// Program counter.
    pub(crate) pc: u16,

    /// Processor status flags.
    pub(crate) p: Status,

    /// Memory collaborator; every bus access goes through it.
    pub(crate) memory: M,

    /// Instruction currently executing; `None` means the next tick
    /// fetches a new opcode.
    in_flight: Option<Context>,

    /// Monotonic cycle counter, for observability only.
    cycles: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over the given memory in its power-on state.
    ///
    /// PC = 0x0000, S = 0xFF, A/X/Y = 0, and only the unused status bit
    /// set. This is not a full hardware reset: no reset vector is read.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFF,
            pc: 0x0000,
            p: Status::new(),
            memory,
            in_flight: None,
            cycles: 0,
        }
    }

    /// Advances the CPU by exactly one clock cycle.
    ///
    /// Performs one cycle's worth of bus activity: the opcode fetch when
    /// no instruction is in flight, otherwise the next cycle of the
    /// current instruction. Register and flag effects land on the
    /// instruction's final cycle.
    ///
    /// # Errors
    ///
    /// All [`ExecutionError`] kinds are terminal: an unmapped opcode
    /// byte, ADC/SBC in decimal mode, a PC/memory desynchronization, or
    /// an opcode-table data error. The core makes no guarantees about
    /// further progress once any of these has fired.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0000, &[0xEA]); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.tick().unwrap();
    /// assert!(!cpu.is_instruction_boundary()); // mid-instruction
    /// cpu.tick().unwrap();
    /// assert!(cpu.is_instruction_boundary());
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn tick(&mut self) -> Result<(), ExecutionError> {
        let ctx = match self.in_flight.take() {
            Some(ctx) => ctx,
            None => {
                let opcode = self.memory.read(self.pc);
                let op = OPCODE_TABLE[opcode as usize].as_ref().ok_or(
                    ExecutionError::UnimplementedOpcode {
                        opcode,
                        pc: self.pc,
                    },
                )?;
                Context::new(op)
            }
        };

        let next = match ctx.op.engine {
            Engine::Read => execution::read_cycle(self, ctx)?,
            Engine::ReadModifyWrite => execution::modify_cycle(self, ctx)?,
        };

        self.cycles += 1;

        if !next.complete() {
            self.in_flight = Some(next);
        }

        Ok(())
    }

    /// Ticks until the next instruction boundary.
    ///
    /// Runs at least one cycle, so calling this at a boundary executes
    /// exactly one whole instruction. Returns the cycles consumed.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExecutionError`] from [`CPU::tick`].
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        let start = self.cycles;
        self.tick()?;
        while self.in_flight.is_some() {
            self.tick()?;
        }
        Ok(self.cycles - start)
    }

    /// True when no instruction is in flight (FetchOpcode state).
    pub fn is_instruction_boundary(&self) -> bool {
        self.in_flight.is_none()
    }

    // ========== Register access ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer value.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// The status flag set.
    pub fn status(&self) -> Status {
        self.p
    }

    /// Total cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_s(&mut self, value: u8) {
        self.s = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status flag set (the unused bit stays asserted).
    pub fn set_status(&mut self, status: Status) {
        self.p = status;
    }

    /// Shared access to the memory collaborator.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory collaborator.
    ///
    /// Mutating memory an in-flight instruction has already read from is
    /// caller error and may trip the PC-desynchronization check.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Flag shorthands ==========

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.p.is_set(crate::status::N)
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.p.is_set(crate::status::V)
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.p.is_set(crate::status::B)
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.p.is_set(crate::status::D)
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.p.is_set(crate::status::I)
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.p.is_set(crate::status::Z)
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.p.is_set(crate::status::C)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::U;
    use crate::FlatMemory;

    #[test]
    fn test_power_on_state() {
        let cpu = CPU::new(FlatMemory::new());

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.s(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status().value(), U);
        assert_eq!(cpu.cycles(), 0);
        assert!(cpu.is_instruction_boundary());
    }

    #[test]
    fn test_unimplemented_opcode_is_fatal() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0x02); // illegal opcode

        let mut cpu = CPU::new(mem);

        match cpu.tick() {
            Err(ExecutionError::UnimplementedOpcode { opcode, pc }) => {
                assert_eq!(opcode, 0x02);
                assert_eq!(pc, 0x0000);
            }
            other => panic!("expected UnimplementedOpcode, got {other:?}"),
        }

        // No cycles consumed, no instruction started
        assert_eq!(cpu.cycles(), 0);
        assert!(cpu.is_instruction_boundary());
    }

    #[test]
    fn test_tick_counts_cycles() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0xEA, 0xEA]); // NOP NOP

        let mut cpu = CPU::new(mem);
        for _ in 0..4 {
            cpu.tick().unwrap();
        }

        assert_eq!(cpu.cycles(), 4);
        assert_eq!(cpu.pc(), 0x0002);
        assert!(cpu.is_instruction_boundary());
    }

    #[test]
    fn test_step_runs_one_instruction() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0xA9, 0x42]); // LDA #$42

        let mut cpu = CPU::new(mem);
        let consumed = cpu.step().unwrap();

        assert_eq!(consumed, 2);
        assert_eq!(cpu.a(), 0x42);
        assert!(cpu.is_instruction_boundary());
    }
}
