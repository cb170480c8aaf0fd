use crate::drivers::led_matrix::{Drive, LedIndex};
use crate::waveform::Phase;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Glowing along the waveform
    Active,
    /// Dark, counting down to the next fly
    ArmedWait,
    /// Waveform done, a new fly and delay are due
    Rearm,
}

/// One animated fly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub(super) fly: LedIndex,
    pub(super) phase: Phase,
    pub(super) drive: Drive,
    pub(super) delay: u16,
}

impl Slot {
    /// Starts finished so the first logic tick re-arms it.
    pub fn new(fly: LedIndex) -> Self {
        Self {
            fly,
            phase: Phase::FINISHED,
            drive: fly.drive(),
            delay: 0,
        }
    }

    #[inline]
    pub fn fly(&self) -> LedIndex {
        self.fly
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn drive(&self) -> Drive {
        self.drive
    }

    #[inline]
    pub fn delay(&self) -> u16 {
        self.delay
    }

    pub fn state(&self) -> SlotState {
        if self.phase.is_finished() {
            SlotState::Rearm
        } else if self.delay > 0 {
            SlotState::ArmedWait
        } else {
            SlotState::Active
        }
    }

    /// A finished waveform owes at least one tick of house-keeping.
    #[inline]
    pub(super) fn mark_finished(&mut self) {
        if self.phase.is_finished() && self.delay == 0 {
            self.delay = 1;
        }
    }

    /// Drive to apply at `step` of the PWM ramp, `None` when dark.
    #[inline]
    pub(super) fn drive_at(&self, step: u8) -> Option<Drive> {
        if self.phase.threshold() > step {
            Some(self.drive)
        } else {
            None
        }
    }
}
