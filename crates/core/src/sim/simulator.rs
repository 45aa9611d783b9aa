//! Simulator: the top-level driver around the processor core.
//!
//! Owns the [`Cpu`] and provides the run loops a host program needs:
//! single-step, bounded run, and run-until-halt (a `JMP` to the current
//! instruction, the idiomatic halt idiom for this machine).

use crate::common::constants::MEM_SIZE;
use crate::config::Config;
use crate::core::Cpu;
use crate::stats::SimStats;

/// Top-level simulator wrapping the processor core.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The processor, exposed for state inspection and test preloading.
    pub cpu: Cpu,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator holding `image` in instruction memory, already
    /// reset.
    pub fn new(image: [u8; MEM_SIZE], config: &Config) -> Self {
        Self {
            cpu: Cpu::new(image, config),
            max_cycles: config.max_cycles,
        }
    }

    /// Advances the machine by one clock tick.
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Advances the machine by `n` clock ticks.
    pub fn run_ticks(&mut self, n: u64) {
        self.cpu.run_ticks(n);
    }

    /// Runs until the PC stops changing between ticks (a self-jump halt
    /// loop) or the configured cycle budget runs out.
    ///
    /// Returns the number of ticks executed. The PC check also waits out
    /// any instructions still draining through the pipeline.
    pub fn run(&mut self) -> u64 {
        let start = self.cpu.stats.cycles;
        let mut quiet_ticks = 0u32;
        while self.cpu.stats.cycles - start < self.max_cycles {
            let pc_before = self.cpu.pc;
            self.cpu.tick();
            if self.cpu.pc == pc_before {
                quiet_ticks += 1;
                // Four quiet ticks drain every in-flight instruction, so a
                // stable PC beyond that is a genuine halt loop.
                if quiet_ticks > 4 {
                    break;
                }
            } else {
                quiet_ticks = 0;
            }
        }
        self.cpu.stats.cycles - start
    }

    /// Raises the interrupt request line.
    pub const fn raise_interrupt(&mut self) {
        self.cpu.raise_interrupt();
    }

    /// Drives the input port.
    pub const fn set_input_port(&mut self, value: u8) {
        self.cpu.input_port = value;
    }

    /// Reads the output port.
    pub const fn output_port(&self) -> u8 {
        self.cpu.output_port
    }

    /// The statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
