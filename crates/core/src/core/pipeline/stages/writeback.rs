//! Writeback (WB) stage.
//!
//! This module implements the final stage of the pipeline. It performs the
//! following:
//! 1. **Register write request:** Selects the ALU result or the loaded byte
//!    and requests the destination-register write; the core commits it at
//!    the tick boundary through the register file's single write port.
//! 2. **Retirement:** Counts completed instructions and emits the commit
//!    trace line.

use crate::core::Cpu;
use crate::isa::disasm;

/// Executes the writeback stage.
///
/// Consumes the MEM/WB latch and returns the destination-register write,
/// if any, as `(rd, value)`.
pub fn writeback_stage(cpu: &mut Cpu) -> Option<(usize, u8)> {
    let wb = cpu.mem_wb;

    if !wb.bubble {
        cpu.stats.retire(wb.inst);
        if cpu.trace {
            tracing::debug!(
                pc = wb.pc,
                inst = wb.inst,
                asm = %disasm::disassemble(wb.inst),
                "retire"
            );
        }
    }

    if wb.ctrl.reg_write && !wb.bubble {
        Some((wb.rd, wb.writeback_value()))
    } else {
        None
    }
}
