//! Processor state container and initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, condition codes,
//!    and the two 256-byte memories.
//! 2. **Pipeline Control:** The four inter-stage latches and the control
//!    sequencer's micro-state.
//! 3. **I/O:** The byte-wide input and output ports and the interrupt line.

/// Tick orchestration and the latch/register commit protocol.
pub mod execution;

use crate::common::constants::MEM_SIZE;
use crate::config::Config;
use crate::core::arch::{Ccr, RegisterFile};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::units::sequencer::Sequencer;
use crate::mem::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Main processor structure containing all architectural and pipeline state.
///
/// The `Cpu` owns everything a tick touches; the stage drivers are free
/// functions over it, and [`Cpu::tick`] commits their outputs at
/// the tick boundary.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers R0-R3 (R3 is the stack pointer).
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u8,
    /// Condition-code register with interrupt shadow.
    pub ccr: Ccr,

    /// Instruction memory (read-only after load).
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,

    /// Byte-wide input port, sampled by IN at Execute.
    pub input_port: u8,
    /// Byte-wide output port, driven by OUT at the Memory stage.
    pub output_port: u8,
    /// Interrupt request line; latched until the entry is taken.
    pub interrupt: bool,

    /// Control sequencer (multi-word micro-state).
    pub sequencer: Sequencer,
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,

    /// Enable per-stage and retirement tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a processor holding `image` in instruction memory, in the
    /// post-reset state.
    pub fn new(image: [u8; MEM_SIZE], config: &Config) -> Self {
        let imem = InstructionMemory::new(image);
        let mut cpu = Self {
            regs: RegisterFile::new(),
            pc: 0,
            ccr: Ccr::new(),
            imem,
            dmem: DataMemory::default(),
            input_port: config.input_port,
            output_port: 0,
            interrupt: false,
            sequencer: Sequencer::new(),
            if_id: IfIdEntry::default(),
            id_ex: IdExEntry::empty(),
            ex_mem: ExMemEntry::empty(),
            mem_wb: MemWbEntry::empty(),
            trace: config.trace,
            stats: SimStats::default(),
        };
        cpu.reset();
        cpu
    }

    /// Applies the reset sequence.
    ///
    /// The PC loads from the reset vector cell (instruction-memory address
    /// 0), the registers take the fixed reset pattern (R3 at the top of
    /// data memory), the condition codes and their shadow clear, every
    /// latch becomes a bubble, and the sequencer goes idle. Memories are
    /// untouched.
    pub fn reset(&mut self) {
        self.pc = self.imem.reset_vector();
        self.regs.reset();
        self.ccr.reset();
        self.if_id = IfIdEntry::default();
        self.id_ex = IdExEntry::empty();
        self.ex_mem = ExMemEntry::empty();
        self.mem_wb = MemWbEntry::empty();
        self.sequencer.reset();
        self.interrupt = false;
    }

    /// Raises the interrupt request line.
    ///
    /// The line stays latched until decode takes the entry; requests made
    /// while an entry, return, or multi-word capture is in progress are
    /// deferred, not lost.
    pub const fn raise_interrupt(&mut self) {
        self.interrupt = true;
    }
}
