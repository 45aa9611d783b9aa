//! Condition-Code Register.
//!
//! Holds the Z/N/C/V flags plus the shadow copy used across an
//! interrupt/RTI pair. Updates are staged during a tick and applied once at
//! the tick boundary with a fixed priority:
//! reset > RTI restore > interrupt save > ALU flag write.
//! Only one branch fires per tick.
//!
//! The shadow copy is valid only between an interrupt entry and the matching
//! RTI; a second interrupt before that RTI overwrites it (no nesting).

/// The four ALU condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Zero: result was 0x00.
    pub z: bool,
    /// Negative: bit 7 of the result.
    pub n: bool,
    /// Carry (or borrow, or rotated-out bit, per operation).
    pub c: bool,
    /// Signed overflow.
    pub v: bool,
}

/// Condition-code register with interrupt shadow and staged updates.
#[derive(Clone, Debug, Default)]
pub struct Ccr {
    flags: Flags,
    shadow: Flags,
    pending_flags: Option<Flags>,
    pending_save: bool,
    pending_restore: bool,
}

impl Ccr {
    /// Creates a cleared CCR (flags and shadow all zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears flags, shadow, and any staged update.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reads the committed flags. Combinational, same-cycle.
    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Reads the committed shadow copy.
    #[inline]
    pub const fn shadow(&self) -> Flags {
        self.shadow
    }

    /// Stages an ALU flag write for this tick.
    pub const fn stage_flags(&mut self, flags: Flags) {
        self.pending_flags = Some(flags);
    }

    /// Stages the interrupt-entry save (`shadow <- flags`) for this tick.
    pub const fn stage_save(&mut self) {
        self.pending_save = true;
    }

    /// Stages the RTI restore (`flags <- shadow`) for this tick.
    pub const fn stage_restore(&mut self) {
        self.pending_restore = true;
    }

    /// Applies at most one staged update, in priority order, and clears the
    /// staging slots.
    pub fn commit(&mut self) {
        if self.pending_restore {
            self.flags = self.shadow;
        } else if self.pending_save {
            self.shadow = self.flags;
        } else if let Some(flags) = self.pending_flags {
            self.flags = flags;
        }
        self.pending_flags = None;
        self.pending_save = false;
        self.pending_restore = false;
    }

    /// Overwrites the committed flags directly.
    ///
    /// Harness/test escape hatch; the pipeline stages updates instead.
    pub const fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }
}
