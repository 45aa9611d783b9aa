//! Instruction-set tests: field packing and the disassembler.
