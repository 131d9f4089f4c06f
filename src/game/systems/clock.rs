//! Fixed-step game clock.
//!
//! Frame time is accumulated and converted into whole simulation steps; the
//! remainder carries over to the next frame so the step rate does not drift.

use std::time::Duration;

use log::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub built_up_time: Duration,
    pub step_interval: Duration,
}

impl GameClock {
    pub fn new(step_interval: Duration) -> Self {
        debug_assert!(!step_interval.is_zero(), "step interval must be positive");
        Self {
            built_up_time: Duration::ZERO,
            step_interval,
        }
    }

    /// Add `elapsed` and return how many steps are due now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.built_up_time += elapsed;
        self.take_due_steps()
    }

    fn take_due_steps(&mut self) -> u32 {
        if self.built_up_time <= self.step_interval {
            return 0;
        }

        let due = self.built_up_time.as_nanos() / self.step_interval.as_nanos();
        let steps = u32::try_from(due).unwrap_or(u32::MAX);
        self.built_up_time -= self.step_interval * steps;

        if steps > 1 {
            warn!("[Clock] Catching up {} steps after a stall", steps);
        } else {
            trace!("[Clock] Step due, {:?} carried over", self.built_up_time);
        }
        steps
    }
}
