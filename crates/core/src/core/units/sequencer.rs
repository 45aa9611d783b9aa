//! Control sequencer.
//!
//! The decode-stage combinational decoder: maps the current instruction
//! word (plus the condition codes, the interrupt line, and its own
//! micro-state) to every per-stage control signal — register addresses and
//! validity flags, the register-write mode, memory enables, the ALU
//! operation, and the six stage-local multiplexer selects.
//!
//! The only persistent state here is the [`Micro`] continuation register
//! for multi-word instructions. On decoding LDM/LDD/STD the sequencer emits
//! the first-cycle signals and arms the matching `*Operand` state; the next
//! cycle the incoming word is consumed as data (whatever its opcode field
//! says) and the sequencer emits the second-cycle signals from its
//! micro-state alone, then falls back to `Idle`. RET/RTI reuse the same
//! mechanism for the two-cycle pop of the return address. The micro-state
//! is owned by the sequencer, updated once per tick boundary, and invisible
//! to software.
//!
//! Interrupt entry is the one exception to opcode-driven decode: it has
//! absolute priority over any opcode, forcing the push-PC microcode and
//! redirecting fetch to the interrupt vector. The instruction in decode
//! that tick is discarded; its own PC is what gets pushed, so RTI resumes
//! by re-fetching it.

use crate::core::arch::{Ccr, RegisterFile};
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{
    AluOp, ControlSignals, MemAddrSel, MemDataSel, OpBSel, PcSel, SpSel, WbSel,
};
use crate::isa::{
    Opcode, carry_sel, cond_sel, encode, flow_sel, ra, rb, stack_sel, two_word_sel, unary_sel,
};

/// Continuation state for multi-word instructions.
///
/// Exactly one state is active; every variant other than `Idle` lives for a
/// single cycle. The register index latched in cycle 1 rides along in the
/// variant, since the second word no longer carries it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Micro {
    /// No continuation pending.
    #[default]
    Idle,
    /// Next word is the LDM immediate for register `rd`.
    LdmOperand {
        /// Destination register latched in cycle 1.
        rd: usize,
    },
    /// Next word is the LDD direct address loading into `rd`.
    LddOperand {
        /// Destination register latched in cycle 1.
        rd: usize,
    },
    /// Next word is the STD direct address storing register `rs`.
    StdOperand {
        /// Source register latched in cycle 1.
        rs: usize,
    },
    /// Next cycle issues the RET/RTI pop of the return address.
    RetOperand {
        /// PC of the RET/RTI word, carried for the retirement trace.
        pc: u8,
        /// The pop came from RTI (flags already restored in cycle 1).
        rti: bool,
    },
}

/// Everything decode produces in one tick.
///
/// The owning core latches `entry`, applies `micro_next` (unless the decode
/// slot stalled), and routes the PC/SP/CCR side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOutput {
    /// The instruction bundle entering the Decode/Execute latch.
    pub entry: IdExEntry,
    /// Micro-state for the next tick.
    pub micro_next: Micro,
    /// Next-PC source.
    pub pc_sel: PcSel,
    /// Jump target value (valid when `pc_sel` is `Jump`).
    pub jump_target: u8,
    /// Stack-pointer update for this tick.
    pub sp_sel: SpSel,
    /// Squash the word fetched this tick (taken jump, interrupt, return).
    pub flush_fetch: bool,
    /// Hold the PC this tick (return window cycles 1 and 2).
    pub hold_fetch: bool,
    /// Save the condition codes into the interrupt shadow this tick.
    pub ccr_save: bool,
    /// Restore the condition codes from the interrupt shadow this tick.
    pub ccr_restore: bool,
    /// An interrupt entry was taken this tick.
    pub interrupt_taken: bool,
}

/// The decode-stage control sequencer.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    micro: Micro,
}

impl Sequencer {
    /// Creates an idle sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns to `Idle` and forgets any pending continuation.
    pub fn reset(&mut self) {
        self.micro = Micro::Idle;
    }

    /// The current continuation state.
    pub const fn micro(&self) -> Micro {
        self.micro
    }

    /// Commits the micro-state chosen by this tick's decode.
    ///
    /// The core skips this when the decode slot stalled, so a held
    /// continuation re-decodes identically next tick.
    pub const fn commit_micro(&mut self, next: Micro) {
        self.micro = next;
    }

    /// Decodes one tick's worth of control signals.
    ///
    /// # Arguments
    ///
    /// * `if_id` - The Fetch/Decode latch contents.
    /// * `regs` - Committed register file (jump targets, SP, LOOP counter).
    /// * `ccr` - Committed condition codes (conditional jump decisions).
    /// * `interrupt` - Interrupt entry fires this tick (the core gates the
    ///   raw line on `Idle` micro-state and no return pop in flight).
    /// * `fetch_pc` - Current fetch PC, the pushed address when the decode
    ///   slot holds a bubble at interrupt entry.
    pub fn decode(
        &self,
        if_id: &IfIdEntry,
        regs: &RegisterFile,
        ccr: &Ccr,
        interrupt: bool,
        fetch_pc: u8,
    ) -> DecodeOutput {
        if interrupt {
            return Self::interrupt_entry(if_id, regs, fetch_pc);
        }
        match self.micro {
            Micro::Idle => Self::decode_opcode(if_id, regs, ccr),
            Micro::LdmOperand { rd } => Self::continuation_ldm(if_id, rd),
            Micro::LddOperand { rd } => Self::continuation_ldd(if_id, rd),
            Micro::StdOperand { rs } => Self::continuation_std(if_id, rs),
            Micro::RetOperand { pc, rti } => Self::continuation_ret(regs, pc, rti),
        }
    }

    /// Interrupt-entry microcode: push the PC of the discarded decode slot,
    /// drop SP, save the flags, and redirect fetch to the vector.
    fn interrupt_entry(if_id: &IfIdEntry, regs: &RegisterFile, fetch_pc: u8) -> DecodeOutput {
        let resume_pc = if if_id.bubble { fetch_pc } else { if_id.pc };
        DecodeOutput {
            entry: IdExEntry {
                pc: if_id.pc,
                inst: if_id.inst,
                bubble: true,
                imm: resume_pc,
                mem_addr: regs.sp(),
                ctrl: ControlSignals {
                    mem_write: true,
                    addr_sel: MemAddrSel::Latched,
                    data_sel: MemDataSel::Link,
                    ..ControlSignals::default()
                },
                ..IdExEntry::default()
            },
            micro_next: Micro::Idle,
            pc_sel: PcSel::Interrupt,
            sp_sel: SpSel::Dec,
            flush_fetch: true,
            ccr_save: true,
            interrupt_taken: true,
            ..DecodeOutput::default()
        }
    }

    /// Opcode-driven decode (micro-state `Idle`).
    fn decode_opcode(if_id: &IfIdEntry, regs: &RegisterFile, ccr: &Ccr) -> DecodeOutput {
        let mut out = DecodeOutput {
            entry: IdExEntry {
                pc: if_id.pc,
                inst: if_id.inst,
                bubble: if_id.bubble,
                ..IdExEntry::default()
            },
            ..DecodeOutput::default()
        };
        if if_id.bubble {
            return out;
        }

        let word = if_id.inst;
        let op = Opcode::from_word(word);
        let a = ra(word);
        let b = rb(word);
        let ctrl = &mut out.entry.ctrl;

        match op {
            Opcode::Nop | Opcode::Reserved => {}
            Opcode::Mov => {
                out.entry.rs2 = b;
                out.entry.s2_valid = true;
                out.entry.rd = a;
                ctrl.reg_write = true;
                ctrl.alu = AluOp::Mov;
            }
            Opcode::Add | Opcode::Sub | Opcode::And | Opcode::Or => {
                out.entry.rs1 = a;
                out.entry.rs2 = b;
                out.entry.s1_valid = true;
                out.entry.s2_valid = true;
                out.entry.rd = a;
                ctrl.reg_write = true;
                ctrl.flag_write = true;
                ctrl.alu = match op {
                    Opcode::Add => AluOp::Add,
                    Opcode::Sub => AluOp::Sub,
                    Opcode::And => AluOp::And,
                    _ => AluOp::Or,
                };
            }
            Opcode::Carry => match a {
                carry_sel::RLC | carry_sel::RRC => {
                    out.entry.rs2 = b;
                    out.entry.s2_valid = true;
                    out.entry.rd = b;
                    ctrl.reg_write = true;
                    ctrl.flag_write = true;
                    ctrl.alu = if a == carry_sel::RLC {
                        AluOp::Rlc
                    } else {
                        AluOp::Rrc
                    };
                }
                _ => {
                    // SETC/CLRC pass operand A through untouched; A is fed
                    // from the ra-field register read, so Z/N recompute from
                    // that value per the ALU post-processing rule.
                    out.entry.rs1 = a;
                    ctrl.flag_write = true;
                    ctrl.alu = if a == carry_sel::SETC {
                        AluOp::Setc
                    } else {
                        AluOp::Clrc
                    };
                }
            },
            Opcode::Stack => match a {
                stack_sel::PUSH => {
                    out.entry.rs2 = b;
                    out.entry.s2_valid = true;
                    out.entry.mem_addr = regs.sp();
                    ctrl.mem_write = true;
                    ctrl.addr_sel = MemAddrSel::Latched;
                    ctrl.data_sel = MemDataSel::Source2;
                    out.sp_sel = SpSel::Dec;
                }
                stack_sel::POP => {
                    out.entry.rd = b;
                    out.entry.mem_addr = regs.sp().wrapping_add(1);
                    ctrl.reg_write = true;
                    ctrl.mem_read = true;
                    ctrl.wb_sel = WbSel::Mem;
                    ctrl.addr_sel = MemAddrSel::Latched;
                    out.sp_sel = SpSel::Inc;
                }
                stack_sel::OUT => {
                    out.entry.rs2 = b;
                    out.entry.s2_valid = true;
                    ctrl.port_write = true;
                    ctrl.data_sel = MemDataSel::Source2;
                }
                _ => {
                    out.entry.rd = b;
                    ctrl.reg_write = true;
                    ctrl.port_read = true;
                    ctrl.wb_sel = WbSel::Alu;
                }
            },
            Opcode::Unary => {
                out.entry.rs2 = b;
                out.entry.s2_valid = true;
                out.entry.rd = b;
                ctrl.reg_write = true;
                ctrl.flag_write = true;
                ctrl.alu = match a {
                    unary_sel::NOT => AluOp::Not,
                    unary_sel::NEG => AluOp::Neg,
                    unary_sel::INC => AluOp::Inc,
                    _ => AluOp::Dec,
                };
            }
            Opcode::CondJump => {
                let flags = ccr.flags();
                let taken = match a {
                    cond_sel::JZ => flags.z,
                    cond_sel::JN => flags.n,
                    cond_sel::JC => flags.c,
                    _ => flags.v,
                };
                if taken {
                    out.pc_sel = PcSel::Jump;
                    out.jump_target = regs.read(b);
                    out.flush_fetch = true;
                }
            }
            Opcode::Loop => {
                // The branch decision uses the decode-read counter value;
                // the decrement itself commits through the normal
                // Execute/Writeback path.
                out.entry.rs2 = a;
                out.entry.s2_valid = true;
                out.entry.rd = a;
                ctrl.reg_write = true;
                ctrl.alu = AluOp::Dec;
                if regs.read(a).wrapping_sub(1) != 0 {
                    out.pc_sel = PcSel::Jump;
                    out.jump_target = regs.read(b);
                    out.flush_fetch = true;
                }
            }
            Opcode::Flow => match a {
                flow_sel::JMP => {
                    out.pc_sel = PcSel::Jump;
                    out.jump_target = regs.read(b);
                    out.flush_fetch = true;
                }
                flow_sel::CALL => {
                    out.entry.imm = if_id.pc.wrapping_add(1);
                    out.entry.mem_addr = regs.sp();
                    ctrl.mem_write = true;
                    ctrl.addr_sel = MemAddrSel::Latched;
                    ctrl.data_sel = MemDataSel::Link;
                    out.sp_sel = SpSel::Dec;
                    out.pc_sel = PcSel::Jump;
                    out.jump_target = regs.read(b);
                    out.flush_fetch = true;
                }
                _ => {
                    // RET/RTI cycle 1: bump SP toward the saved return
                    // address and open the fetch-hold window; nothing
                    // enters the pipeline until cycle 2 issues the pop.
                    out.entry.bubble = true;
                    out.micro_next = Micro::RetOperand {
                        pc: if_id.pc,
                        rti: a == flow_sel::RTI,
                    };
                    out.sp_sel = SpSel::Inc;
                    out.pc_sel = PcSel::Hold;
                    out.flush_fetch = true;
                    out.hold_fetch = true;
                    out.ccr_restore = a == flow_sel::RTI;
                }
            },
            Opcode::TwoWord => {
                out.entry.bubble = true;
                out.micro_next = match a {
                    two_word_sel::LDM => Micro::LdmOperand { rd: b },
                    two_word_sel::LDD => Micro::LddOperand { rd: b },
                    two_word_sel::STD => Micro::StdOperand { rs: b },
                    _ => {
                        // Reserved sub-selector: plain no-op, no capture.
                        out.entry.bubble = false;
                        Micro::Idle
                    }
                };
            }
            Opcode::Ldi => {
                out.entry.rs1 = a;
                out.entry.s1_valid = true;
                out.entry.rd = b;
                ctrl.reg_write = true;
                ctrl.mem_read = true;
                ctrl.wb_sel = WbSel::Mem;
                ctrl.addr_sel = MemAddrSel::Source1;
            }
            Opcode::Sti => {
                out.entry.rs1 = a;
                out.entry.rs2 = b;
                out.entry.s1_valid = true;
                out.entry.s2_valid = true;
                ctrl.mem_write = true;
                ctrl.addr_sel = MemAddrSel::Source2;
                ctrl.data_sel = MemDataSel::Source1;
            }
        }
        out
    }

    /// LDM cycle 2: route the captured word through the ALU as a MOV.
    ///
    /// The entry's `inst` is re-synthesized from the micro-state: the word
    /// in the latch is the immediate, not an instruction, and retirement
    /// accounting classifies by `inst`.
    fn continuation_ldm(if_id: &IfIdEntry, rd: usize) -> DecodeOutput {
        DecodeOutput {
            entry: IdExEntry {
                pc: if_id.pc,
                inst: encode(Opcode::TwoWord, two_word_sel::LDM as u8, rd as u8),
                rd,
                imm: if_id.inst,
                ctrl: ControlSignals {
                    reg_write: true,
                    alu: AluOp::Mov,
                    b_sel: OpBSel::Imm,
                    wb_sel: WbSel::Alu,
                    ..ControlSignals::default()
                },
                ..IdExEntry::default()
            },
            ..DecodeOutput::default()
        }
    }

    /// LDD cycle 2: memory read at the captured direct address.
    fn continuation_ldd(if_id: &IfIdEntry, rd: usize) -> DecodeOutput {
        DecodeOutput {
            entry: IdExEntry {
                pc: if_id.pc,
                inst: encode(Opcode::TwoWord, two_word_sel::LDD as u8, rd as u8),
                rd,
                mem_addr: if_id.inst,
                ctrl: ControlSignals {
                    reg_write: true,
                    mem_read: true,
                    wb_sel: WbSel::Mem,
                    addr_sel: MemAddrSel::Latched,
                    ..ControlSignals::default()
                },
                ..IdExEntry::default()
            },
            ..DecodeOutput::default()
        }
    }

    /// STD cycle 2: memory write at the captured direct address, data from
    /// the register latched in cycle 1 (forwardable like any store data).
    fn continuation_std(if_id: &IfIdEntry, rs: usize) -> DecodeOutput {
        DecodeOutput {
            entry: IdExEntry {
                pc: if_id.pc,
                inst: encode(Opcode::TwoWord, two_word_sel::STD as u8, rs as u8),
                rs2: rs,
                s2_valid: true,
                mem_addr: if_id.inst,
                ctrl: ControlSignals {
                    mem_write: true,
                    addr_sel: MemAddrSel::Latched,
                    data_sel: MemDataSel::Source2,
                    ..ControlSignals::default()
                },
                ..IdExEntry::default()
            },
            ..DecodeOutput::default()
        }
    }

    /// RET/RTI cycle 2: issue the pop of the return address.
    ///
    /// SP was incremented in cycle 1, so the decode-read stack pointer is
    /// already the saved-address cell. The pop travels the pipeline as a
    /// memory read whose Memory-stage result redirects the PC; the
    /// pipelined `pop_pc` flag keeps Fetch held and Decode bubbled until
    /// then.
    fn continuation_ret(regs: &RegisterFile, pc: u8, rti: bool) -> DecodeOutput {
        let sel = if rti { flow_sel::RTI } else { flow_sel::RET };
        DecodeOutput {
            entry: IdExEntry {
                pc,
                inst: encode(Opcode::Flow, sel as u8, 0),
                mem_addr: regs.sp(),
                ctrl: ControlSignals {
                    mem_read: true,
                    addr_sel: MemAddrSel::Latched,
                    pop_pc: true,
                    ..ControlSignals::default()
                },
                ..IdExEntry::default()
            },
            pc_sel: PcSel::Hold,
            flush_fetch: true,
            hold_fetch: true,
            ..DecodeOutput::default()
        }
    }
}
