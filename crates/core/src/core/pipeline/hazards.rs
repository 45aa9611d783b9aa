//! Hazard detection and operand forwarding.
//!
//! Pure combinational functions over the pipeline latches:
//! 1. **Forwarding:** One selector per ALU operand, bypassing the register
//!    file with the Memory-stage result (first priority) or the
//!    Writeback-stage value (second priority).
//! 2. **Load-use stall:** The one dependency forwarding cannot satisfy — a
//!    load in Execute whose destination the instruction in Decode reads.
//! 3. **Fetch hold:** An extra fetch-latency cycle for the JMP/CALL/RET/RTI
//!    opcode group, suppressed for conditional jumps (those fetch
//!    speculatively and flush on taken).
//! 4. **Return window:** The pipelined return-flush that keeps Fetch held
//!    and Decode bubbled while a RET/RTI pop travels to the Memory stage.
//!
//! Every output defaults to its inactive value: an empty or bubbled latch
//! produces "no hazard", never a spurious stall or flush.

use crate::isa::Opcode;

use super::latches::{ExMemEntry, IdExEntry, MemWbEntry};

/// Forwarding source for one ALU operand, highest priority first checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForwardSrc {
    /// No in-flight producer: read the committed register file.
    #[default]
    RegFile,
    /// The Memory-stage (EX/MEM latch) result.
    Memory,
    /// The Writeback-stage (MEM/WB latch) value.
    Writeback,
}

/// True if `entry` is a real in-flight write to register `rs`.
///
/// Loads are excluded on the Memory path by the caller: their data does not
/// exist until the Memory stage has read it.
#[inline]
fn writes_reg(rd: usize, reg_write: bool, bubble: bool, rs: usize, valid: bool) -> bool {
    valid && !bubble && reg_write && rd == rs
}

/// Computes the forwarding selectors for the two Execute-stage operands.
///
/// Priority per operand: Memory-stage result over Writeback-stage value
/// over the register file. A selector only fires when the operand's
/// validity flag is set, the producing stage's write is enabled, and the
/// destination address matches — otherwise it stays at the no-hazard
/// default.
pub fn forward_selects(
    ex: &IdExEntry,
    mem: &ExMemEntry,
    wb: &MemWbEntry,
) -> (ForwardSrc, ForwardSrc) {
    let pick = |rs: usize, valid: bool| -> ForwardSrc {
        if writes_reg(mem.rd, mem.ctrl.reg_write, mem.bubble, rs, valid) && !mem.ctrl.mem_read {
            ForwardSrc::Memory
        } else if writes_reg(wb.rd, wb.ctrl.reg_write, wb.bubble, rs, valid) {
            ForwardSrc::Writeback
        } else {
            ForwardSrc::RegFile
        }
    };
    (pick(ex.rs1, ex.s1_valid), pick(ex.rs2, ex.s2_valid))
}

/// Checks for a load-use hazard between Execute and Decode.
///
/// Asserted when the instruction in Execute reads data memory into a
/// register and the instruction decoded this tick reads that register
/// (with validity). The Decode latch must then hold for one tick and a
/// bubble enters Execute; on the retry the loaded value arrives over the
/// Writeback forwarding path.
pub fn need_stall_load_use(ex: &IdExEntry, decode: &IdExEntry) -> bool {
    if ex.bubble || !ex.ctrl.mem_read || !ex.ctrl.reg_write {
        return false;
    }
    (decode.s1_valid && decode.rs1 == ex.rd) || (decode.s2_valid && decode.rs2 == ex.rd)
}

/// Decides whether Fetch holds the PC for the word fetched this tick.
///
/// The JMP/CALL/RET/RTI group needs one extra cycle before the next fetch
/// is valid (the redirect resolves in Decode next tick). Conditional jumps
/// are resolved without stalling Fetch: sequential fetch continues
/// speculatively and Decode flushes only if the branch is taken. The check
/// is suppressed while a two-word capture is pending, because the incoming
/// word is an operand, not an instruction.
pub fn fetch_hold(word: u8, capture_pending: bool) -> bool {
    !capture_pending && Opcode::from_word(word) == Opcode::Flow
}

/// True while a RET/RTI pop is in flight in Execute or Memory.
///
/// The return-flush signal is pipelined forward through the latches so the
/// bubble keeps reaching Decode until the Memory stage produces the return
/// address and redirects the PC.
pub fn return_in_flight(id_ex: &IdExEntry, ex_mem: &ExMemEntry) -> bool {
    id_ex.ctrl.pop_pc || ex_mem.ctrl.pop_pc
}
