//! Memory (MEM) stage.
//!
//! This module implements the fourth stage of the pipeline. It performs the
//! following:
//! 1. **Data read:** Combinational read of the data memory for loads, POP,
//!    and the RET/RTI return pop.
//! 2. **Data write:** Stages the store for the tick-boundary commit.
//! 3. **Port output:** Drives the output port for OUT.
//! 4. **Return redirect:** A read flagged `pop_pc` carries the return
//!    address; the stage requests the PC override that ends the return
//!    window.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;

/// Side effects the Memory stage hands back to the core for commit.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemOutput {
    /// The entry entering the Memory/Writeback latch.
    pub entry: MemWbEntry,
    /// PC override from a return pop; outranks every other PC source.
    pub pc_redirect: Option<u8>,
    /// Value for the output port (OUT commits here, not at Writeback).
    pub port_out: Option<u8>,
}

/// Executes the memory access stage.
///
/// Consumes the EX/MEM latch and produces the MEM/WB latch entry. Writes
/// are staged into the data memory and become visible at the tick boundary;
/// the read, like hardware, sees the pre-tick contents.
pub fn memory_stage(cpu: &mut Cpu) -> MemOutput {
    let ex = cpu.ex_mem;
    let mut out = MemOutput::default();

    // No bubble gate here: control signals are set only by real decode
    // paths, and the interrupt-entry push travels as a bubble slot (it must
    // store without retiring).
    let mut mem_data = 0;
    if ex.ctrl.mem_read {
        mem_data = cpu.dmem.read(ex.mem_addr);
        if ex.ctrl.pop_pc {
            out.pc_redirect = Some(mem_data);
        }
    }
    if ex.ctrl.mem_write {
        cpu.dmem.stage_write(ex.mem_addr, ex.store_data);
    }
    if ex.ctrl.port_write {
        out.port_out = Some(ex.store_data);
    }

    out.entry = MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        bubble: ex.bubble,
        rd: ex.rd,
        result: ex.result,
        mem_data,
        ctrl: ex.ctrl,
    };
    out
}
