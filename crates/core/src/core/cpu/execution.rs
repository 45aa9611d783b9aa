//! Main execution loop.
//!
//! This module implements the per-tick cycle of the processor. It performs
//! the following:
//! 1. **Stage Evaluation:** Runs the five stage drivers back-to-front
//!    against the latches as they stood at the start of the tick.
//! 2. **Commit:** Applies every latch, register, flag, memory, and PC
//!    update at the tick boundary, so the whole machine steps as one
//!    synchronous circuit.
//! 3. **Hazard Bookkeeping:** Applies the load-use hold and counts stalls,
//!    flushes, and interrupt entries.

use super::Cpu;
use crate::core::arch::WriteMode;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::SpSel;
use crate::core::pipeline::stages::{decode, execute, fetch, memory, writeback};

impl Cpu {
    /// Advances the processor by one clock tick.
    ///
    /// Every stage reads the pre-tick state; nothing a stage produces is
    /// visible to another stage until the commit below. The commit order
    /// within the tick boundary is fixed:
    /// latches, then the register-file write (destination and stack
    /// pointer through the single dual-target port), then the staged data
    /// memory write, then the condition codes, then the PC.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;

        // Evaluate back-to-front; each driver sees only pre-tick latches.
        let reg_wb = writeback::writeback_stage(self);
        let mem = memory::memory_stage(self);
        let ex_entry = execute::execute_stage(self);
        let dec = decode::decode_stage(self);
        let fetched = fetch::fetch_stage(self, &dec, mem.pc_redirect);

        // Latch commit.
        self.mem_wb = mem.entry;
        self.ex_mem = ex_entry;
        if dec.stall {
            // Hold Fetch/Decode and the micro-state; Execute gets a bubble.
            // Every other side effect of the stalled decode is discarded
            // and re-derived on the retry.
            self.id_ex = IdExEntry::empty();
            self.stats.load_use_stalls += 1;
        } else {
            self.id_ex = dec.out.entry;
            self.if_id = fetched.entry;
            self.sequencer.commit_micro(dec.out.micro_next);
        }

        // Register-file commit: the Writeback destination write and the
        // decode-issued stack-pointer step share the one dual-target port.
        let sp_step = if dec.stall { SpSel::Hold } else { dec.out.sp_sel };
        let sp_data = match sp_step {
            SpSel::Hold => 0,
            SpSel::Inc => self.regs.sp().wrapping_add(1),
            SpSel::Dec => self.regs.sp().wrapping_sub(1),
        };
        let mode = match (reg_wb, sp_step) {
            (None, SpSel::Hold) => WriteMode::None,
            (Some(_), SpSel::Hold) => WriteMode::Normal,
            (None, _) => WriteMode::Sp,
            (Some(_), _) => WriteMode::Both,
        };
        let (rd, data) = reg_wb.unwrap_or((0, 0));
        self.regs.write(mode, rd, data, sp_data);

        // Memory, flag, and port commit.
        self.dmem.commit();
        if !dec.stall {
            if dec.out.ccr_save {
                self.ccr.stage_save();
            }
            if dec.out.ccr_restore {
                self.ccr.stage_restore();
            }
        }
        self.ccr.commit();
        if let Some(value) = mem.port_out {
            self.output_port = value;
        }

        // PC commit and hazard bookkeeping.
        if !dec.stall {
            self.pc = fetched.next_pc;
            if dec.out.flush_fetch {
                self.stats.flushes += 1;
            }
            if dec.out.interrupt_taken {
                self.stats.interrupts += 1;
                self.interrupt = false;
            }
        }
    }

    /// Runs until `cycles` ticks have elapsed.
    pub fn run_ticks(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }
}
