//! Condition-Code Register Tests.
//!
//! Verifies the staged-commit protocol and the interrupt shadow: at most
//! one staged event applies per tick, in the order restore > save > flag
//! write.

use pipe8_core::core::arch::{Ccr, Flags};

fn some_flags() -> Flags {
    Flags {
        z: true,
        n: false,
        c: true,
        v: false,
    }
}

#[test]
fn reset_clears_flags_and_shadow() {
    let mut ccr = Ccr::new();
    ccr.set_flags(some_flags());
    ccr.stage_save();
    ccr.commit();
    ccr.reset();
    assert_eq!(ccr.flags(), Flags::default());
    assert_eq!(ccr.shadow(), Flags::default());
}

#[test]
fn staged_flags_invisible_until_commit() {
    let mut ccr = Ccr::new();
    ccr.stage_flags(some_flags());
    assert_eq!(ccr.flags(), Flags::default(), "same-tick read sees old flags");
    ccr.commit();
    assert_eq!(ccr.flags(), some_flags());
}

#[test]
fn save_copies_flags_to_shadow() {
    let mut ccr = Ccr::new();
    ccr.set_flags(some_flags());
    ccr.stage_save();
    ccr.commit();
    assert_eq!(ccr.shadow(), some_flags());
    assert_eq!(ccr.flags(), some_flags(), "save leaves the live flags alone");
}

#[test]
fn restore_copies_shadow_to_flags() {
    let mut ccr = Ccr::new();
    ccr.set_flags(some_flags());
    ccr.stage_save();
    ccr.commit();
    ccr.set_flags(Flags::default());
    ccr.stage_restore();
    ccr.commit();
    assert_eq!(ccr.flags(), some_flags());
}

#[test]
fn save_outranks_flag_write_in_one_tick() {
    // Interrupt entry in the same tick an ALU result commits: the shadow
    // must capture the pre-tick flags and the ALU update is dropped.
    let mut ccr = Ccr::new();
    ccr.set_flags(some_flags());
    ccr.stage_flags(Flags::default());
    ccr.stage_save();
    ccr.commit();
    assert_eq!(ccr.shadow(), some_flags());
    assert_eq!(ccr.flags(), some_flags());
}

#[test]
fn restore_outranks_save() {
    let mut ccr = Ccr::new();
    ccr.set_flags(some_flags());
    ccr.stage_save();
    ccr.commit();

    ccr.set_flags(Flags::default());
    ccr.stage_save();
    ccr.stage_restore();
    ccr.commit();
    assert_eq!(ccr.flags(), some_flags(), "restore applied");
    assert_eq!(ccr.shadow(), some_flags(), "save dropped");
}

#[test]
fn commit_clears_staging() {
    let mut ccr = Ccr::new();
    ccr.stage_flags(some_flags());
    ccr.commit();
    ccr.commit();
    assert_eq!(ccr.flags(), some_flags(), "second commit is a no-op");
}
