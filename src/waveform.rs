//! Glow-and-fade brightness curve
//!
//! Each entry is the number of ramp steps (out of 255) the LED stays lit
//! during one PWM period at that phase.

use crate::config::RAMP_STEPS;

pub static WAVEFORM: [u8; RAMP_STEPS] = [
      0,   0,   0,   0,   0,   1,   1,   2,   4,   5,   7,  10,  13,  16,  20,  24,
     29,  35,  41,  48,  55,  63,  71,  79,  88,  98, 107, 117, 127, 137, 147, 157,
    167, 177, 186, 195, 204, 212, 219, 226, 233, 238, 243, 247, 250, 252, 254, 254,
    243, 233, 223, 214, 205, 196, 188, 180, 172, 165, 158, 151, 145, 139, 133, 127,
    122, 116, 111, 107, 102,  98,  93,  89,  86,  82,  78,  75,  72,  68,  65,  63,
     60,  57,  55,  52,  50,  48,  46,  44,  42,  40,  38,  36,  35,  33,  32,  30,
     29,  27,  26,  25,  24,  23,  22,  21,  20,  19,  18,  17,  16,  16,  15,  14,
     13,  13,  12,  12,  11,  11,  10,  10,   9,   9,   8,   8,   7,   7,   7,   6,
      6,   6,   5,   5,   5,   5,   4,   4,   4,   4,   4,   3,   3,   3,   3,   3,
      3,   2,   2,   2,   2,   2,   2,   2,   2,   2,   1,   1,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
];

/// Position within the waveform. `FINISHED` marks a slot whose glow has
/// run out and still owes a re-arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase(u8);

impl Phase {
    pub const START: Phase = Phase(0);
    pub const FINISHED: Phase = Phase(0xff);

    pub const fn at(step: u8) -> Phase {
        Phase(step)
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        self == Self::FINISHED
    }

    /// True only for the first step, the state of a freshly re-armed slot.
    #[inline]
    pub fn is_start(self) -> bool {
        self == Self::START
    }

    #[inline]
    pub fn step(self) -> u8 {
        self.0
    }

    /// Steps forward; the step after the last entry is `FINISHED`, and
    /// `FINISHED` wraps to the start.
    #[inline]
    pub fn next(self) -> Phase {
        Phase(self.0.wrapping_add(1))
    }

    /// On-time threshold for this phase. Finished slots stay dark.
    #[inline]
    pub fn threshold(self) -> u8 {
        WAVEFORM.get(usize::from(self.0)).copied().unwrap_or(0)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::FINISHED
    }
}
