//! Sleep primitives used by the scheduler
//!
//! Two waits with different trade-offs: `precise_wait` is short and
//! accurate and keeps the multiplexing flicker-free, `deep_sleep` is long,
//! coarse and cheap. Both return only after their wake event fires.

use embedded_hal::blocking::delay::DelayUs;

use crate::config::TIMER_TICK_HZ;

/// Coarse sleep intervals. Approximate, uncalibrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SleepStep {
    /// ~12.5 ms
    Short = 0,
    /// ~100 ms
    Medium = 1,
    /// ~800 ms
    Long = 2,
    /// ~6.4 s
    VeryLong = 3,
}

impl SleepStep {
    pub const fn approx_us(self) -> u32 {
        match self {
            SleepStep::Short => 12_500,
            SleepStep::Medium => 100_000,
            SleepStep::Long => 800_000,
            SleepStep::VeryLong => 6_400_000,
        }
    }
}

pub trait SleepManager {
    /// Blocks for `ticks` of the precise timer.
    fn precise_wait(&mut self, ticks: u16);

    /// Blocks for one coarse step in the lowest power state.
    fn deep_sleep(&mut self, step: SleepStep);
}

/// Converts precise timer ticks to microseconds, never below 1.
pub fn ticks_to_us(ticks: u16) -> u32 {
    let us = u64::from(ticks) * 1_000_000 / u64::from(TIMER_TICK_HZ);
    (us as u32).max(1)
}

/// Models both sleeps on a blocking delay, e.g. a monotonic-clock sleep on
/// a host.
pub struct DelaySleep<D> {
    delay: D,
}

impl<D: DelayUs<u32>> DelaySleep<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayUs<u32>> SleepManager for DelaySleep<D> {
    fn precise_wait(&mut self, ticks: u16) {
        self.delay.delay_us(ticks_to_us(ticks));
    }

    fn deep_sleep(&mut self, step: SleepStep) {
        self.delay.delay_us(step.approx_us());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_round_to_whole_microseconds() {
        assert_eq!(ticks_to_us(1), 1);
        assert_eq!(ticks_to_us(13), 6);
        assert_eq!(ticks_to_us(2_000), 1_000);
    }

    #[test]
    fn coarse_steps_dwarf_precise_waits() {
        let finest = SleepStep::Short.approx_us();
        assert!(finest > ticks_to_us(u16::MAX) / 4);
        assert!(SleepStep::Medium.approx_us() > finest);
        assert!(SleepStep::Long.approx_us() > SleepStep::Medium.approx_us());
        assert!(SleepStep::VeryLong.approx_us() > SleepStep::Long.approx_us());
    }
}
