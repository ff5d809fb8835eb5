//! Simulation statistics collection and reporting.
//!
//! This module tracks what the engine has executed since power-on. It provides:
//! 1. **Cycle Counts:** Machine cycles, completed instruction cycles, and derived CPI.
//! 2. **Cycle Mix:** Machine cycles broken down by cycle type.
//! 3. **Events:** Halts and OUT writes.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::CycleType;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Machine cycles executed.
    pub machine_cycles: u64,
    /// Instruction cycles completed.
    pub instruction_cycles: u64,
    /// Machine cycles executed, indexed by [`CycleType::index`].
    pub by_type: [u64; CycleType::COUNT],
    /// Number of HLT micro-ops executed.
    pub halts: u64,
    /// Number of OUT micro-ops executed.
    pub outputs: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            machine_cycles: 0,
            instruction_cycles: 0,
            by_type: [0; CycleType::COUNT],
            halts: 0,
            outputs: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`SimStats::summary_sections`] to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "cycle_mix"];

impl SimStats {
    /// Records one executed machine cycle of the given type.
    pub fn record_cycle(&mut self, kind: CycleType) {
        self.machine_cycles += 1;
        self.by_type[kind.index()] += 1;
    }

    /// Machine cycles executed of one type.
    pub fn cycles_of(&self, kind: CycleType) -> u64 {
        self.by_type[kind.index()]
    }

    /// Renders only the requested sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Names from [`STATS_SECTIONS`], or empty for all.
    pub fn summary_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.machine_cycles.max(1);
        let instr = self.instruction_cycles.max(1);
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "FRONT PANEL MACHINE STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.machine_cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_machine_cycles       {}", self.machine_cycles);
            let _ = writeln!(out, "sim_instruction_cycles   {}", self.instruction_cycles);
            let _ = writeln!(out, "sim_freq                 {khz:.2} kHz");
            let _ = writeln!(out, "sim_cpi                  {:.4}", cyc as f64 / instr as f64);
            let _ = writeln!(out, "sim_halts                {}", self.halts);
            let _ = writeln!(out, "sim_outputs              {}", self.outputs);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("cycle_mix") {
            let _ = writeln!(out, "CYCLE MIX");
            for kind in CycleType::ALL {
                let count = self.cycles_of(kind);
                let _ = writeln!(
                    out,
                    "  {:<22} {} ({:.2}%)",
                    kind.label(),
                    count,
                    (count as f64 / cyc as f64) * 100.0
                );
            }
        }
        let _ = write!(out, "==========================================================");
        out
    }

    /// Renders every statistics section.
    pub fn summary(&self) -> String {
        self.summary_sections(&[])
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        println!("{}", self.summary());
    }
}
