//! Pipeline control signals and multiplexer selects.
//!
//! This module defines everything the control sequencer emits per stage:
//! 1. **ALU control:** The [`AluOp`] operation code.
//! 2. **Operand selection:** ALU B source select.
//! 3. **Memory control:** Address and write-data source selects.
//! 4. **Flow control:** PC and stack-pointer source selects.
//!
//! Every select is a typed enum local to the stage that consumes it, never a
//! raw bit pattern — the same numeric select value means different things in
//! different stages, and the types keep those namespaces apart. Each enum's
//! `#[default]` variant is its no-hazard/no-op value, so a defaulted latch
//! entry is a harmless bubble by construction.

/// ALU operation codes (4-bit in hardware).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Pass operand B through; clears C and V.
    #[default]
    Mov,
    /// `A + B`; carry-out and signed overflow.
    Add,
    /// `A - B`; borrow and signed overflow.
    Sub,
    /// Bitwise AND; C and V always clear.
    And,
    /// Bitwise OR; C and V always clear.
    Or,
    /// Rotate B left circularly by one; C takes the old bit 7.
    Rlc,
    /// Rotate B right circularly by one; C takes the old bit 0.
    Rrc,
    /// Pass A through; C set.
    Setc,
    /// Pass A through; C cleared.
    Clrc,
    /// Bitwise NOT of B.
    Not,
    /// Two's-complement negate of B; C = (B != 0), V = (B == 0x80).
    Neg,
    /// `B + 1`; carry-out, V = (B == 0x7F).
    Inc,
    /// `B - 1`; borrow, V = (B == 0x80).
    Dec,
}

/// Source for ALU operand B, resolved in Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSel {
    /// The (possibly forwarded) `rs2` register value.
    #[default]
    Reg,
    /// The latched immediate (captured second word).
    Imm,
}

/// Source for the write-back value, resolved in Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSel {
    /// The Execute-stage result.
    #[default]
    Alu,
    /// The byte read in the Memory stage.
    Mem,
}

/// Source for the data-memory address, resolved in Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemAddrSel {
    /// The address latched at decode (stack pointer or captured word).
    #[default]
    Latched,
    /// The forwarded `rs1` value (LDI's indirect address).
    Source1,
    /// The forwarded `rs2` value (STI's indirect address).
    Source2,
}

/// Source for the data-memory write value, resolved in Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemDataSel {
    /// The forwarded `rs1` value (STI's store data).
    #[default]
    Source1,
    /// The forwarded `rs2` value (PUSH/STD/OUT data).
    Source2,
    /// The latched immediate: PC+1 for CALL, the pushed PC on interrupt entry.
    Link,
}

/// Source for the next program counter, resolved at decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PcSel {
    /// Sequential fetch (`PC + 1`, or held by the fetch-hold rule).
    #[default]
    Sequential,
    /// Hold: a return pop is in flight, the address is not known yet.
    Hold,
    /// A taken jump's target register value.
    Jump,
    /// The interrupt vector cell.
    Interrupt,
}

/// Source for the next stack-pointer value, resolved at decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpSel {
    /// Stack pointer unchanged.
    #[default]
    Hold,
    /// `SP + 1` (POP, RET/RTI cycle 1).
    Inc,
    /// `SP - 1` (PUSH, CALL, interrupt entry).
    Dec,
}

/// Per-instruction control signals carried down the pipeline.
///
/// Generated once by the control sequencer at decode; later stages only
/// consume the fields addressed to them. `Default` is the no-op pattern.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Write the destination register at Writeback.
    pub reg_write: bool,
    /// Read data memory at the Memory stage.
    pub mem_read: bool,
    /// Write data memory at the Memory stage.
    pub mem_write: bool,
    /// Commit ALU flags to the CCR at the end of Execute.
    pub flag_write: bool,
    /// ALU operation.
    pub alu: AluOp,
    /// ALU operand B source.
    pub b_sel: OpBSel,
    /// Write-back value source.
    pub wb_sel: WbSel,
    /// Data-memory address source.
    pub addr_sel: MemAddrSel,
    /// Data-memory write-data source.
    pub data_sel: MemDataSel,
    /// Sample the input port at Execute (IN).
    pub port_read: bool,
    /// Drive the output port at the Memory stage (OUT).
    pub port_write: bool,
    /// The Memory-stage read redirects the PC (RET/RTI pop).
    pub pop_pc: bool,
}
