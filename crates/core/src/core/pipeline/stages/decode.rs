//! Decode (ID) stage.
//!
//! This module implements the second stage of the pipeline. It performs the
//! following:
//! 1. **Interrupt gating:** Samples the interrupt line and takes the entry
//!    when the sequencer is idle and no return pop is in flight.
//! 2. **Control decode:** Runs the control sequencer over the Fetch/Decode
//!    latch (or its multi-word continuation state).
//! 3. **Load-use detection:** Holds the decode slot for one tick when the
//!    instruction in Execute is a load whose destination this instruction
//!    reads.
//!
//! Decode is where control flow resolves: taken jumps read their target
//! register here, against the committed register file with no forwarding.
//! Software must keep three instructions between a target-register producer
//! and the jump that reads it.

use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::units::sequencer::{DecodeOutput, Micro};

/// What decode hands the core for this tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeResult {
    /// The sequencer's full decode output.
    pub out: DecodeOutput,
    /// Load-use stall: hold Fetch/Decode, feed Execute a bubble, discard
    /// every other side effect of this decode.
    pub stall: bool,
}

/// Executes the instruction decode stage.
///
/// Runs the sequencer against the IF/ID latch as it stood at the start of
/// the tick and checks the result for a load-use hazard. On a stall the
/// caller must not apply any of `out`'s side effects; the slot re-decodes
/// identically next tick (the micro-state is held too).
pub fn decode_stage(cpu: &mut Cpu) -> DecodeResult {
    let take_interrupt = cpu.interrupt
        && cpu.sequencer.micro() == Micro::Idle
        && !hazards::return_in_flight(&cpu.id_ex, &cpu.ex_mem);

    let out = cpu
        .sequencer
        .decode(&cpu.if_id, &cpu.regs, &cpu.ccr, take_interrupt, cpu.pc);

    // The interrupt entry reads no registers, so it can never stall; it
    // pre-empts a stalled slot, whose PC is what gets pushed.
    let stall = !take_interrupt && hazards::need_stall_load_use(&cpu.id_ex, &out.entry);

    if cpu.trace && !out.entry.bubble && !stall {
        tracing::trace!(pc = out.entry.pc, inst = out.entry.inst, "decode");
    }

    DecodeResult { out, stall }
}
