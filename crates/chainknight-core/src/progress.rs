//! Cosmetic loading progress.
//!
//! While a tool loads, the percentage creeps up by a random step every tick
//! but never past the cap; only the real ready signal takes it to 100. The
//! value drives the progress bar and nothing else.

use rand::Rng;

/// Final value once content is ready
pub const COMPLETE: u8 = 100;

#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    value: u8,
    cap: u8,
    max_step: u8,
    running: bool,
}

impl ProgressSimulator {
    /// `cap` is clamped to 0..=100 and `max_step` to at least 1.
    pub fn new(cap: u8, max_step: u8) -> Self {
        Self {
            value: 0,
            cap: cap.min(COMPLETE),
            max_step: max_step.max(1),
            running: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reset to 0 and start ticking
    pub fn start(&mut self) {
        self.value = 0;
        self.running = true;
    }

    /// Advance by a random step in `1..=max_step`, capped. No-op when stopped.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> u8 {
        if self.running && self.value < self.cap {
            let step = rng.random_range(1..=self.max_step);
            self.value = self.value.saturating_add(step).min(self.cap);
        }
        self.value
    }

    /// Jump to 100 and stop ticking
    pub fn complete(&mut self) {
        self.value = COMPLETE;
        self.running = false;
    }

    /// Stop ticking, keeping the current value
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop ticking and return to 0
    pub fn reset(&mut self) {
        self.value = 0;
        self.running = false;
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(90, 12)
    }
}
