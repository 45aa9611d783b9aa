//! Fetch (IF) stage.
//!
//! This module implements the first stage of the pipeline. It performs the
//! following:
//! 1. **Instruction fetch:** Combinational read of the instruction memory
//!    at the current PC.
//! 2. **Next-PC selection:** Applies the PC priority chain — return-pop
//!    redirect, interrupt vector, taken-jump target, the return/fetch hold
//!    rules, then sequential.
//! 3. **Flush:** Marks the fetched word as a bubble whenever a
//!    decode-or-later event redirected control this tick.

use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::IfIdEntry;
use crate::core::pipeline::signals::PcSel;
use crate::core::units::sequencer::Micro;

use super::decode::DecodeResult;

/// What fetch hands the core for this tick.
#[derive(Clone, Copy, Debug)]
pub struct FetchOutput {
    /// The entry entering the Fetch/Decode latch.
    pub entry: IfIdEntry,
    /// The PC at the start of the next tick.
    pub next_pc: u8,
}

/// Executes the instruction fetch stage.
///
/// `dec` is this tick's decode result and `pc_redirect` the Memory stage's
/// return-pop override. On a load-use stall the core discards this output
/// and holds the Fetch/Decode latch and PC instead.
pub fn fetch_stage(cpu: &Cpu, dec: &DecodeResult, pc_redirect: Option<u8>) -> FetchOutput {
    let word = cpu.imem.fetch(cpu.pc);

    // The word fetched this tick is squashed by any control redirect, and
    // by the return window that keeps Decode empty until the pop lands.
    if let Some(target) = pc_redirect {
        return FetchOutput {
            entry: IfIdEntry::default(),
            next_pc: target,
        };
    }
    if dec.out.interrupt_taken {
        return FetchOutput {
            entry: IfIdEntry::default(),
            next_pc: cpu.imem.interrupt_vector(),
        };
    }
    match dec.out.pc_sel {
        PcSel::Jump => {
            return FetchOutput {
                entry: IfIdEntry::default(),
                next_pc: dec.out.jump_target,
            };
        }
        PcSel::Hold => {
            return FetchOutput {
                entry: IfIdEntry::default(),
                next_pc: cpu.pc,
            };
        }
        PcSel::Sequential | PcSel::Interrupt => {}
    }
    if hazards::return_in_flight(&cpu.id_ex, &cpu.ex_mem) {
        return FetchOutput {
            entry: IfIdEntry::default(),
            next_pc: cpu.pc,
        };
    }

    // Normal fetch. The PC holds on the JMP/CALL/RET/RTI group (the word
    // re-fetched next tick is squashed by that group's own flush), unless
    // this word is really the operand of a two-word instruction.
    let capture_pending = matches!(
        dec.out.micro_next,
        Micro::LdmOperand { .. } | Micro::LddOperand { .. } | Micro::StdOperand { .. }
    );
    let next_pc = if hazards::fetch_hold(word, capture_pending) {
        cpu.pc
    } else {
        cpu.pc.wrapping_add(1)
    };
    FetchOutput {
        entry: IfIdEntry {
            pc: cpu.pc,
            inst: word,
            bubble: false,
        },
        next_pc,
    }
}
