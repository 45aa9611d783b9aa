//! Execute (EX) stage.
//!
//! This module implements the third stage of the pipeline. It performs the
//! following:
//! 1. **Operand Resolution:** Re-reads the register file and applies the
//!    forwarding multiplexers to resolve data hazards.
//! 2. **ALU Execution:** Runs the selected operation and stages the flag
//!    update for the tick boundary.
//! 3. **Address/Data Resolution:** Picks the memory address and store data
//!    that ride to the Memory stage.

use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, ForwardSrc};
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::{MemAddrSel, MemDataSel, OpBSel};
use crate::core::units::alu;

/// Resolves one forwarded operand.
///
/// `file_value` is the dual-port register-file read for this operand; it is
/// taken here, not at decode, so a distance-3 producer is visible through
/// the committed file with no forwarding path at all.
fn resolve(cpu: &Cpu, src: ForwardSrc, file_value: u8) -> u8 {
    match src {
        ForwardSrc::RegFile => file_value,
        ForwardSrc::Memory => cpu.ex_mem.result,
        ForwardSrc::Writeback => cpu.mem_wb.writeback_value(),
    }
}

/// Executes the instruction execute stage.
///
/// Consumes the ID/EX latch, resolves operands through the forwarding
/// network, runs the ALU, and produces the EX/MEM latch entry. Flag writes
/// are staged into the CCR and commit at the tick boundary.
pub fn execute_stage(cpu: &mut Cpu) -> ExMemEntry {
    let id = cpu.id_ex;

    let (file_a, file_b) = cpu.regs.read2(id.rs1, id.rs2);
    let (fwd_a, fwd_b) = hazards::forward_selects(&id, &cpu.ex_mem, &cpu.mem_wb);
    let a = resolve(cpu, fwd_a, file_a);
    let reg_b = resolve(cpu, fwd_b, file_b);
    let b = match id.ctrl.b_sel {
        OpBSel::Reg => reg_b,
        OpBSel::Imm => id.imm,
    };

    let (alu_result, flags) = alu::execute(id.ctrl.alu, a, b);
    let result = if id.ctrl.port_read {
        cpu.input_port
    } else {
        alu_result
    };

    if id.ctrl.flag_write && !id.bubble {
        cpu.ccr.stage_flags(flags);
    }

    let mem_addr = match id.ctrl.addr_sel {
        MemAddrSel::Latched => id.mem_addr,
        MemAddrSel::Source1 => a,
        MemAddrSel::Source2 => reg_b,
    };
    let store_data = match id.ctrl.data_sel {
        MemDataSel::Source1 => a,
        MemDataSel::Source2 => reg_b,
        MemDataSel::Link => id.imm,
    };

    if cpu.trace && !id.bubble {
        tracing::trace!(pc = id.pc, result, "ex");
    }

    ExMemEntry {
        pc: id.pc,
        inst: id.inst,
        bubble: id.bubble,
        rd: id.rd,
        result,
        mem_addr,
        store_data,
        ctrl: id.ctrl,
    }
}
