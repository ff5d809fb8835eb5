//! Front-Panel Input Lines.
//!
//! This module implements the engine side of the front panel. It performs the following:
//! 1. **Power:** Compares the `on` line with the power status and switches accordingly.
//! 2. **Edge Detection:** Fires reset, run, examine, and deposit on rising edges only.
//! 3. **Step Latching:** Records the step lines for [`Engine::update`](super::Engine::update).
//! 4. **Key Latch:** Captures a key word when the `key` line becomes occupied.
//!
//! Scanning the same lines twice has no further effect, so a driver may scan
//! after every control change without tracking what it already sent.

use tracing::debug;

use super::Engine;
use crate::common::Word;
use crate::isa::CycleType;

/// Physical front-panel controls, as seen at one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputLines {
    /// Power switch.
    pub on: bool,
    /// Run/stop switch.
    pub run: bool,
    /// Reset button.
    pub reset: bool,
    /// Single machine-cycle step button.
    pub m_step: bool,
    /// Single instruction step button.
    pub i_step: bool,
    /// Examine button: load PC from the switches.
    pub examine: bool,
    /// Examine-next button: advance PC.
    pub examine_next: bool,
    /// Deposit button: write the switches at PC.
    pub deposit: bool,
    /// Deposit-next button: advance PC, then write the switches there.
    pub deposit_next: bool,
    /// Data/address switch bank.
    pub switches: Word,
    /// Keyboard line; `Some` while a key is held.
    pub key: Option<Word>,
}

/// Outcome of a front-panel action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// The action took effect.
    Applied,
    /// Ignored: the machine is off.
    NotPoweredOn,
    /// Ignored: the machine is running.
    Running,
}

fn rose(now: bool, before: bool) -> bool {
    now && !before
}

fn note_ignored(control: &'static str, action: PanelAction) {
    if action != PanelAction::Applied {
        debug!(control, ?action, "panel control ignored");
    }
}

impl Engine {
    /// Scans the front-panel input lines.
    ///
    /// Power follows the `on` level. Every other control acts on the
    /// transition from the previously scanned lines, so holding a button
    /// fires it once.
    ///
    /// # Arguments
    ///
    /// * `lines` - Current state of every control.
    pub fn scan_inputs(&mut self, lines: &InputLines) {
        if lines.on && !self.status.on {
            self.power_on();
        } else if !lines.on && self.status.on {
            self.power_off();
        }

        let before = self.lines;
        self.lines = *lines;

        if !self.status.on {
            return;
        }

        if rose(lines.reset, before.reset) {
            note_ignored("reset", self.reset());
        }

        if rose(lines.run, before.run) {
            if !self.status.halted {
                self.status.running = true;
            }
        } else if !lines.run && before.run {
            self.status.running = false;
        }

        if rose(lines.examine, before.examine) {
            note_ignored("examine", self.examine(lines.switches));
        }
        if rose(lines.examine_next, before.examine_next) {
            note_ignored("examine next", self.examine_next());
        }
        if rose(lines.deposit, before.deposit) {
            note_ignored("deposit", self.deposit(lines.switches));
        }
        if rose(lines.deposit_next, before.deposit_next) {
            note_ignored("deposit next", self.deposit_next(lines.switches));
        }

        if let (Some(key), None) = (lines.key, before.key) {
            self.latch_key(key);
        }
    }

    /// Stores a word in the key latch, replacing any unread key.
    pub fn latch_key(&mut self, key: Word) {
        self.key_latch = Some(self.width.truncate(u64::from(key)));
    }

    fn panel_idle(&self) -> PanelAction {
        if !self.status.on {
            PanelAction::NotPoweredOn
        } else if self.status.running {
            PanelAction::Running
        } else {
            PanelAction::Applied
        }
    }

    /// Loads PC with an address and restarts the sequencer at FETCH.
    pub fn examine(&mut self, address: Word) -> PanelAction {
        let action = self.panel_idle();
        if action == PanelAction::Applied {
            self.regs.pc = self.width.truncate(u64::from(address));
            self.m_cycle = 0;
            self.next_cycle = CycleType::Fetch;
            debug!(pc = self.regs.pc, "examine");
        }
        action
    }

    /// Advances PC by one word.
    pub fn examine_next(&mut self) -> PanelAction {
        let action = self.panel_idle();
        if action == PanelAction::Applied {
            self.regs.pc = self.width.increment(self.regs.pc);
            self.m_cycle = 0;
            self.next_cycle = CycleType::Fetch;
            debug!(pc = self.regs.pc, "examine next");
        }
        action
    }

    /// Writes a value at PC.
    pub fn deposit(&mut self, value: Word) -> PanelAction {
        let action = self.panel_idle();
        if action == PanelAction::Applied {
            self.put_word_at(i64::from(self.regs.pc), u64::from(value));
            debug!(pc = self.regs.pc, value, "deposit");
        }
        action
    }

    /// Advances PC by one word, then writes a value there.
    pub fn deposit_next(&mut self, value: Word) -> PanelAction {
        let action = self.panel_idle();
        if action == PanelAction::Applied {
            self.regs.pc = self.width.increment(self.regs.pc);
            self.put_word_at(i64::from(self.regs.pc), u64::from(value));
            debug!(pc = self.regs.pc, value, "deposit next");
        }
        action
    }
}
