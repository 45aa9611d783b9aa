//! Architectural constants.
//!
//! Memory geometry, the two fixed instruction-memory cells, register-file
//! geometry, and the deterministic register reset pattern.

/// Size of each of the two memories (instruction and data) in bytes.
pub const MEM_SIZE: usize = 256;

/// Instruction-memory address of the reset vector cell.
///
/// On reset the program counter is loaded with the byte stored here.
pub const RESET_VECTOR_ADDR: usize = 0;

/// Instruction-memory address of the interrupt vector cell.
///
/// Interrupt entry redirects fetch to the byte stored here.
pub const INT_VECTOR_ADDR: usize = 1;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 4;

/// Register index of the stack pointer (R3 doubles as SP).
pub const SP: usize = 3;

/// Register-file contents after reset.
///
/// R0-R2 clear to zero; R3 (the stack pointer) starts at the top of data
/// memory so the first PUSH lands at 0xFF. Test suites assert this exact
/// pattern.
pub const RESET_REGISTERS: [u8; NUM_REGS] = [0x00, 0x00, 0x00, 0xFF];
