//! Control Hazard Tests.
//!
//! Verifies the fetch-hold rule, the pipelined return window, and that
//! flushed wrong-path instructions leave no architectural trace.

use pipe8_core::core::pipeline::hazards::{fetch_hold, return_in_flight};
use pipe8_core::core::pipeline::latches::{ExMemEntry, IdExEntry};
use pipe8_core::core::pipeline::signals::ControlSignals;
use pipe8_core::isa::{Opcode, encode, flow_sel};

use crate::common::asm::{inc, jc, jmp, jz, ldm, mov, nop, setc, sti};
use crate::common::harness::{PROG_BASE, TestContext};

// ─── Fetch hold rule ─────────────────────────────────────────────────────

#[test]
fn flow_group_holds_fetch() {
    for sel in [flow_sel::JMP, flow_sel::CALL, flow_sel::RET, flow_sel::RTI] {
        assert!(fetch_hold(encode(Opcode::Flow, sel as u8, 0), false));
    }
}

#[test]
fn conditional_jumps_fetch_speculatively() {
    assert!(!fetch_hold(encode(Opcode::CondJump, 0, 1), false));
}

#[test]
fn plain_instructions_do_not_hold() {
    assert!(!fetch_hold(encode(Opcode::Add, 0, 1), false));
    assert!(!fetch_hold(encode(Opcode::Nop, 0, 0), false));
}

#[test]
fn pending_capture_suppresses_the_hold() {
    // An operand byte that happens to look like a flow opcode is data.
    let ret_shaped = encode(Opcode::Flow, flow_sel::RET as u8, 0);
    assert!(!fetch_hold(ret_shaped, true));
}

#[test]
fn return_window_tracks_the_pop_flag() {
    let pop = ControlSignals {
        pop_pc: true,
        ..ControlSignals::default()
    };
    let in_ex = IdExEntry {
        ctrl: pop,
        ..IdExEntry::default()
    };
    let in_mem = ExMemEntry {
        ctrl: pop,
        ..ExMemEntry::default()
    };
    assert!(return_in_flight(&in_ex, &ExMemEntry::default()));
    assert!(return_in_flight(&IdExEntry::default(), &in_mem));
    assert!(!return_in_flight(&IdExEntry::default(), &ExMemEntry::default()));
}

// ─── Through the running pipeline ────────────────────────────────────────

#[test]
fn taken_jump_squashes_the_wrong_path() {
    // jmp over an inc; the inc must never retire.
    let mut ctx = TestContext::new(&[jmp(1), inc(0), inc(0)]);
    ctx.set_reg(1, PROG_BASE + 3); // land past both incs
    ctx.run_program(3);
    assert_eq!(ctx.reg(0), 0, "wrong-path incs never executed");
    assert!(ctx.cpu().stats.flushes >= 1);
}

#[test]
fn flushed_store_never_reaches_memory() {
    let mut ctx = TestContext::new(&[jmp(1), sti(2, 3)]);
    ctx.set_reg(1, PROG_BASE + 2);
    ctx.set_reg(2, 0x77);
    ctx.set_reg(3, 0x40);
    ctx.run_program(2);
    assert_eq!(ctx.dmem(0x40), 0, "squashed store left no trace");
}

#[test]
fn not_taken_conditional_falls_through_without_flush() {
    let mut ctx = TestContext::new(&[jz(1), inc(0)]);
    ctx.set_reg(1, 0x00);
    ctx.run_program(2);
    assert_eq!(ctx.reg(0), 1, "fall-through path executed");
    assert_eq!(ctx.cpu().stats.flushes, 0);
}

#[test]
fn taken_conditional_flushes_the_speculative_word() {
    // Flags commit at the end of the producer's Execute tick, so one word
    // of spacing puts them in view of the jump's decode.
    let mut ctx = TestContext::new(&[setc(), nop(), jc(1), inc(0), inc(0)]);
    ctx.set_reg(1, PROG_BASE + 5);
    ctx.run_program(5);
    assert_eq!(ctx.reg(0), 0, "both incs squashed");
    assert_eq!(ctx.cpu().stats.flushes, 1);
}

#[test]
fn jump_target_wants_committed_producers() {
    // The target register is read at decode with no forwarding, so the
    // producer sits three instructions ahead of the jump.
    let mut ctx = TestContext::new(&[
        ldm(1),
        PROG_BASE + 8, // target: past the trap incs
        mov(2, 2),
        mov(2, 2),
        mov(2, 2),
        jmp(1),
        inc(0),
        inc(0),
    ]);
    ctx.run_program(8);
    assert_eq!(ctx.reg(0), 0, "jump used the freshly loaded target");
    assert_eq!(ctx.reg(1), PROG_BASE + 8);
}
