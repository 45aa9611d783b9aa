//! Instruction set definitions.
//!
//! An instruction word is 8 bits: a 4-bit opcode followed by two 2-bit
//! fields `ra` and `rb`. Depending on the opcode, `ra`/`rb` select registers
//! or act as opcode sub-selectors. This module provides:
//! 1. **Field extraction:** `opcode`/`ra`/`rb` accessors over the raw word.
//! 2. **Opcode classification:** The [`Opcode`] enum covering all 16 encodings.
//! 3. **Sub-selectors:** Constant modules for the four-way opcode groups.
//! 4. **Encoding:** [`encode`] for building words in tests and tools.

/// Instruction disassembler for debug tracing and test diagnostics.
pub mod disasm;

/// Bit position of the 4-bit opcode field.
pub const OPCODE_SHIFT: u8 = 4;

/// Bit position of the 2-bit `ra` field.
pub const RA_SHIFT: u8 = 2;

/// Mask for a 2-bit register/sub-selector field.
pub const FIELD_MASK: u8 = 0b11;

/// Extracts the 4-bit opcode field from an instruction word.
#[inline]
pub const fn opcode_bits(word: u8) -> u8 {
    word >> OPCODE_SHIFT
}

/// Extracts the 2-bit `ra` field (register selector or sub-selector).
#[inline]
pub const fn ra(word: u8) -> usize {
    ((word >> RA_SHIFT) & FIELD_MASK) as usize
}

/// Extracts the 2-bit `rb` field (register selector or sub-selector).
#[inline]
pub const fn rb(word: u8) -> usize {
    (word & FIELD_MASK) as usize
}

/// Builds an instruction word from its opcode and field values.
///
/// Field values are masked to their 2-bit width.
#[inline]
pub const fn encode(op: Opcode, ra: u8, rb: u8) -> u8 {
    (op.bits() << OPCODE_SHIFT) | ((ra & FIELD_MASK) << RA_SHIFT) | (rb & FIELD_MASK)
}

/// The 16 primary opcodes of the instruction word.
///
/// Groups that pack four operations into one opcode (selected by `ra`) are
/// represented by a single variant; the sub-selector modules below name the
/// `ra` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Opcode {
    /// `0000` — no-op, and the carrier encoding for two-word continuations.
    #[default]
    Nop,
    /// `0001` — `MOV ra, rb`.
    Mov,
    /// `0010` — `ADD ra, rb`.
    Add,
    /// `0011` — `SUB ra, rb`.
    Sub,
    /// `0100` — `AND ra, rb`.
    And,
    /// `0101` — `OR ra, rb`.
    Or,
    /// `0110` — carry group: RLC/RRC/SETC/CLRC selected by `ra`.
    Carry,
    /// `0111` — stack/port group: PUSH/POP/OUT/IN selected by `ra`.
    Stack,
    /// `1000` — unary group: NOT/NEG/INC/DEC selected by `ra`, operand `rb`.
    Unary,
    /// `1001` — conditional jump group: JZ/JN/JC/JV selected by `ra`, target `rb`.
    CondJump,
    /// `1010` — `LOOP ra, rb`.
    Loop,
    /// `1011` — flow group: JMP/CALL/RET/RTI selected by `ra`.
    Flow,
    /// `1100` — two-word group: LDM/LDD/STD selected by `ra`, register `rb`.
    TwoWord,
    /// `1101` — `LDI ra, rb` (indirect load).
    Ldi,
    /// `1110` — `STI ra, rb` (indirect store).
    Sti,
    /// `1111` — reserved; decodes to a no-op.
    Reserved,
}

impl Opcode {
    /// Classifies the opcode field of a raw instruction word.
    pub const fn from_word(word: u8) -> Self {
        match opcode_bits(word) {
            0b0001 => Self::Mov,
            0b0010 => Self::Add,
            0b0011 => Self::Sub,
            0b0100 => Self::And,
            0b0101 => Self::Or,
            0b0110 => Self::Carry,
            0b0111 => Self::Stack,
            0b1000 => Self::Unary,
            0b1001 => Self::CondJump,
            0b1010 => Self::Loop,
            0b1011 => Self::Flow,
            0b1100 => Self::TwoWord,
            0b1101 => Self::Ldi,
            0b1110 => Self::Sti,
            0b1111 => Self::Reserved,
            _ => Self::Nop,
        }
    }

    /// Returns the 4-bit encoding of this opcode.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Nop => 0b0000,
            Self::Mov => 0b0001,
            Self::Add => 0b0010,
            Self::Sub => 0b0011,
            Self::And => 0b0100,
            Self::Or => 0b0101,
            Self::Carry => 0b0110,
            Self::Stack => 0b0111,
            Self::Unary => 0b1000,
            Self::CondJump => 0b1001,
            Self::Loop => 0b1010,
            Self::Flow => 0b1011,
            Self::TwoWord => 0b1100,
            Self::Ldi => 0b1101,
            Self::Sti => 0b1110,
            Self::Reserved => 0b1111,
        }
    }
}

/// `ra` sub-selectors for the carry group (opcode `0110`).
pub mod carry_sel {
    /// Rotate `rb` left through itself; carry takes the old bit 7.
    pub const RLC: usize = 0;
    /// Rotate `rb` right through itself; carry takes the old bit 0.
    pub const RRC: usize = 1;
    /// Set the carry flag.
    pub const SETC: usize = 2;
    /// Clear the carry flag.
    pub const CLRC: usize = 3;
}

/// `ra` sub-selectors for the stack/port group (opcode `0111`).
pub mod stack_sel {
    /// `mem[SP] <- rb; SP <- SP - 1`.
    pub const PUSH: usize = 0;
    /// `SP <- SP + 1; rb <- mem[SP]`.
    pub const POP: usize = 1;
    /// `output port <- rb`.
    pub const OUT: usize = 2;
    /// `rb <- input port`.
    pub const IN: usize = 3;
}

/// `ra` sub-selectors for the unary group (opcode `1000`).
pub mod unary_sel {
    /// `rb <- !rb`.
    pub const NOT: usize = 0;
    /// `rb <- -rb` (two's complement).
    pub const NEG: usize = 1;
    /// `rb <- rb + 1`.
    pub const INC: usize = 2;
    /// `rb <- rb - 1`.
    pub const DEC: usize = 3;
}

/// `ra` sub-selectors for the conditional jump group (opcode `1001`).
pub mod cond_sel {
    /// Jump if the zero flag is set.
    pub const JZ: usize = 0;
    /// Jump if the negative flag is set.
    pub const JN: usize = 1;
    /// Jump if the carry flag is set.
    pub const JC: usize = 2;
    /// Jump if the overflow flag is set.
    pub const JV: usize = 3;
}

/// `ra` sub-selectors for the flow group (opcode `1011`).
pub mod flow_sel {
    /// `PC <- rb`.
    pub const JMP: usize = 0;
    /// `mem[SP] <- PC + 1; SP <- SP - 1; PC <- rb`.
    pub const CALL: usize = 1;
    /// Two-cycle pop of the return address into the PC.
    pub const RET: usize = 2;
    /// As RET, plus restore the condition codes from the interrupt shadow.
    pub const RTI: usize = 3;
}

/// `ra` sub-selectors for the two-word group (opcode `1100`).
pub mod two_word_sel {
    /// `rb <- immediate` (second word).
    pub const LDM: usize = 0;
    /// `rb <- mem[address]` (second word is the direct address).
    pub const LDD: usize = 1;
    /// `mem[address] <- rb` (second word is the direct address).
    pub const STD: usize = 2;
}
