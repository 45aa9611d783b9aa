//! ALU Operation Tests.
//!
//! Deterministic edge-case vectors for every operation, plus property
//! tests for the flag rules that hold across the whole input space. Every
//! hand-picked vector sits on an architectural boundary: 0x00, 0x01, 0x7F,
//! 0x80, 0xFF, and the carry/overflow crossings between them.

use pipe8_core::core::arch::Flags;
use pipe8_core::core::pipeline::signals::AluOp;
use pipe8_core::core::units::alu;
use proptest::prelude::*;
use rstest::rstest;

/// Thin wrapper to keep test lines short.
fn run(op: AluOp, a: u8, b: u8) -> (u8, Flags) {
    alu::execute(op, a, b)
}

fn flags(z: bool, n: bool, c: bool, v: bool) -> Flags {
    Flags { z, n, c, v }
}

// ─── Arithmetic ──────────────────────────────────────────────────────────

#[rstest]
#[case(0x00, 0x00, 0x00, flags(true, false, false, false))]
#[case(0x01, 0x01, 0x02, flags(false, false, false, false))]
#[case(0x7F, 0x01, 0x80, flags(false, true, false, true))] // pos overflow
#[case(0xFF, 0x01, 0x00, flags(true, false, true, false))] // carry out
#[case(0x80, 0x80, 0x00, flags(true, false, true, true))] // neg overflow
#[case(0xFF, 0xFF, 0xFE, flags(false, true, true, false))]
fn add_vectors(#[case] a: u8, #[case] b: u8, #[case] r: u8, #[case] f: Flags) {
    assert_eq!(run(AluOp::Add, a, b), (r, f));
}

#[rstest]
#[case(0x05, 0x05, 0x00, flags(true, false, false, false))]
#[case(0x00, 0x01, 0xFF, flags(false, true, true, false))] // borrow
#[case(0x80, 0x01, 0x7F, flags(false, false, false, true))] // neg overflow
#[case(0x7F, 0xFF, 0x80, flags(false, true, true, true))]
#[case(0x10, 0x08, 0x08, flags(false, false, false, false))]
fn sub_vectors(#[case] a: u8, #[case] b: u8, #[case] r: u8, #[case] f: Flags) {
    assert_eq!(run(AluOp::Sub, a, b), (r, f));
}

#[rstest]
#[case(AluOp::Inc, 0xFF, 0x00, flags(true, false, true, false))]
#[case(AluOp::Inc, 0x7F, 0x80, flags(false, true, false, true))]
#[case(AluOp::Inc, 0x00, 0x01, flags(false, false, false, false))]
#[case(AluOp::Dec, 0x00, 0xFF, flags(false, true, true, false))]
#[case(AluOp::Dec, 0x80, 0x7F, flags(false, false, false, true))]
#[case(AluOp::Dec, 0x01, 0x00, flags(true, false, false, false))]
fn inc_dec_vectors(#[case] op: AluOp, #[case] b: u8, #[case] r: u8, #[case] f: Flags) {
    assert_eq!(run(op, 0, b), (r, f));
}

#[rstest]
#[case(0x00, 0x00, flags(true, false, false, false))] // -0 = 0, no carry
#[case(0x01, 0xFF, flags(false, true, true, false))]
#[case(0x80, 0x80, flags(false, true, true, true))] // -(-128) overflows
#[case(0xFF, 0x01, flags(false, false, true, false))]
fn neg_vectors(#[case] b: u8, #[case] r: u8, #[case] f: Flags) {
    assert_eq!(run(AluOp::Neg, 0, b), (r, f));
}

// ─── Logic and moves ─────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::And, 0xF0, 0x0F, 0x00, flags(true, false, false, false))]
#[case(AluOp::And, 0xFF, 0x81, 0x81, flags(false, true, false, false))]
#[case(AluOp::Or, 0xF0, 0x0F, 0xFF, flags(false, true, false, false))]
#[case(AluOp::Or, 0x00, 0x00, 0x00, flags(true, false, false, false))]
fn logic_vectors(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] r: u8, #[case] f: Flags) {
    assert_eq!(run(op, a, b), (r, f));
}

#[test]
fn not_inverts_and_sets_zn() {
    assert_eq!(run(AluOp::Not, 0, 0xFF), (0x00, flags(true, false, false, false)));
    assert_eq!(run(AluOp::Not, 0, 0x0F), (0xF0, flags(false, true, false, false)));
}

#[test]
fn mov_passes_b_through() {
    assert_eq!(run(AluOp::Mov, 0xAA, 0x55), (0x55, flags(false, false, false, false)));
    assert_eq!(run(AluOp::Mov, 0xAA, 0x80), (0x80, flags(false, true, false, false)));
}

// ─── Rotates and carry control ───────────────────────────────────────────

#[rstest]
#[case(AluOp::Rlc, 0x80, 0x01, true)] // bit 7 wraps to bit 0, into carry
#[case(AluOp::Rlc, 0x01, 0x02, false)]
#[case(AluOp::Rrc, 0x01, 0x80, true)] // bit 0 wraps to bit 7, into carry
#[case(AluOp::Rrc, 0x80, 0x40, false)]
fn rotate_vectors(#[case] op: AluOp, #[case] b: u8, #[case] r: u8, #[case] c: bool) {
    let (result, f) = run(op, 0, b);
    assert_eq!(result, r);
    assert_eq!(f.c, c);
}

#[test]
fn setc_clrc_pass_a_and_drive_carry() {
    let (r, f) = run(AluOp::Setc, 0x42, 0);
    assert_eq!(r, 0x42);
    assert!(f.c);
    assert!(!f.z && !f.n);

    let (r, f) = run(AluOp::Clrc, 0x00, 0);
    assert_eq!(r, 0x00);
    assert!(!f.c);
    assert!(f.z, "Z recomputes from the passed-through operand");
}

// ─── Flag properties over the full input space ───────────────────────────

proptest! {
    #[test]
    fn z_iff_result_zero(a: u8, b: u8) {
        for op in [AluOp::Add, AluOp::Sub, AluOp::And, AluOp::Or, AluOp::Mov] {
            let (r, f) = run(op, a, b);
            prop_assert_eq!(f.z, r == 0);
            prop_assert_eq!(f.n, r & 0x80 != 0);
        }
    }

    #[test]
    fn logic_and_mov_always_clear_cv(a: u8, b: u8) {
        for op in [AluOp::And, AluOp::Or, AluOp::Mov, AluOp::Not] {
            let (_, f) = run(op, a, b);
            prop_assert!(!f.c && !f.v, "{:?} must clear C and V", op);
        }
    }

    #[test]
    fn add_matches_wide_arithmetic(a: u8, b: u8) {
        let (r, f) = run(AluOp::Add, a, b);
        let wide = u16::from(a) + u16::from(b);
        prop_assert_eq!(u16::from(r), wide & 0xFF);
        prop_assert_eq!(f.c, wide > 0xFF);
    }

    #[test]
    fn sub_then_add_round_trips(a: u8, b: u8) {
        let (diff, _) = run(AluOp::Sub, a, b);
        let (back, _) = run(AluOp::Add, diff, b);
        prop_assert_eq!(back, a);
    }

    #[test]
    fn rotates_are_inverses(b: u8) {
        let (left, _) = run(AluOp::Rlc, 0, b);
        let (back, _) = run(AluOp::Rrc, 0, left);
        prop_assert_eq!(back, b);
    }
}
