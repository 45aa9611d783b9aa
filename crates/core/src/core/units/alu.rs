//! Arithmetic Logic Unit.
//!
//! Pure combinational function used by the Execute stage: two 8-bit
//! operands and an operation code in, an 8-bit result and the four
//! condition flags out. No hidden state.
//!
//! C and V start each evaluation cleared and are raised only by the
//! operations that define them, while Z and N are recomputed from the
//! result after every operation. Operations that never touch C/V (MOV,
//! AND, OR, NOT) therefore commit C=0 and V=0 whenever the instruction
//! updates flags — a reproducible property of the machine, asserted by the
//! test suite, not an omission.

use crate::core::arch::Flags;
use crate::core::pipeline::signals::AluOp;

/// Bit 7 of an 8-bit value (sign bit).
const SIGN_BIT: u8 = 0x80;

/// Returns true if `x` has its sign bit set.
#[inline]
const fn negative(x: u8) -> bool {
    x & SIGN_BIT != 0
}

/// Executes one ALU operation.
///
/// # Arguments
///
/// * `op` - The operation to perform.
/// * `a`  - Operand A (the `ra`-side register value).
/// * `b`  - Operand B (the `rb`-side register value or latched immediate).
///
/// # Returns
///
/// The 8-bit result and the Z/N/C/V flags the operation produced.
pub fn execute(op: AluOp, a: u8, b: u8) -> (u8, Flags) {
    let mut c = false;
    let mut v = false;

    let r = match op {
        AluOp::Mov => b,
        AluOp::Add => {
            let (r, carry) = a.overflowing_add(b);
            c = carry;
            v = negative(a) == negative(b) && negative(r) != negative(a);
            r
        }
        AluOp::Sub => {
            let (r, borrow) = a.overflowing_sub(b);
            c = borrow;
            v = negative(a) != negative(b) && negative(r) != negative(a);
            r
        }
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Rlc => {
            c = negative(b);
            b.rotate_left(1)
        }
        AluOp::Rrc => {
            c = b & 1 != 0;
            b.rotate_right(1)
        }
        AluOp::Setc => {
            c = true;
            a
        }
        AluOp::Clrc => a,
        AluOp::Not => !b,
        AluOp::Neg => {
            c = b != 0;
            v = b == 0x80;
            b.wrapping_neg()
        }
        AluOp::Inc => {
            let (r, carry) = b.overflowing_add(1);
            c = carry;
            v = b == 0x7F;
            r
        }
        AluOp::Dec => {
            let (r, borrow) = b.overflowing_sub(1);
            c = borrow;
            v = b == 0x80;
            r
        }
    };

    let flags = Flags {
        z: r == 0,
        n: negative(r),
        c,
        v,
    };
    (r, flags)
}
