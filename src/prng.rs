//! 16-bit Galois LFSR with entropy injection

use crate::config::{LFSR_SEED, LFSR_TAPS};

/// Sentinel that entropy injection never complements; `!0xffff` would be
/// the locked-up all-zero state.
const ALL_ONES: u16 = 0xffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr {
    state: u16,
}

impl Lfsr {
    /// A zero seed is replaced by the default seed.
    pub const fn new(seed: u16) -> Self {
        Self {
            state: if seed == 0 { LFSR_SEED } else { seed },
        }
    }

    #[inline]
    pub fn state(&self) -> u16 {
        self.state
    }

    /// One shift-register step.
    #[inline]
    pub fn advance(&mut self) {
        let feedback = if self.state & 1 != 0 { LFSR_TAPS } else { 0 };
        self.state = (self.state >> 1) ^ feedback;
    }

    /// Two steps, full state.
    pub fn next_u16(&mut self) -> u16 {
        self.advance();
        self.advance();
        self.state
    }

    /// Two steps, low byte.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u16() & 0xff) as u8
    }

    /// Random value of `width` bits. Widths outside 1..=16 yield 0 without
    /// touching the state.
    pub fn bounded(&mut self, width: u8) -> u16 {
        match width {
            16 => self.next_u16(),
            1..=15 => self.next_u16() & ((1u16 << width) - 1),
            _ => 0,
        }
    }

    /// Folds one noisy bit into the state. Always advances at least once.
    pub fn inject_entropy(&mut self, bit: bool) {
        if bit && self.state != ALL_ONES {
            self.state = !self.state;
        }
        self.advance();
    }
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new(LFSR_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_golden_values() {
        let mut rng = Lfsr::default();
        rng.advance();
        assert_eq!(rng.state(), 0x82b0);
        rng.advance();
        assert_eq!(rng.state(), 0x4158);

        let mut rng = Lfsr::default();
        assert_eq!(rng.next_u16(), 0x4158);
        assert_eq!(rng.next_u16(), 0x1056);
        assert_eq!(rng.next_u8(), 0x15);
    }

    #[test]
    fn maximal_period_never_hits_zero() {
        let mut rng = Lfsr::new(1);
        let mut steps = 0u32;
        loop {
            rng.advance();
            steps += 1;
            assert_ne!(rng.state(), 0);
            if rng.state() == 1 {
                break;
            }
        }
        assert_eq!(steps, 65_535);
    }

    #[test]
    fn bounded_respects_width() {
        let mut rng = Lfsr::default();
        for width in 1..=16u8 {
            for _ in 0..200 {
                let value = u32::from(rng.bounded(width));
                assert!(value < (1u32 << width), "width {} gave {}", width, value);
            }
        }
    }

    #[test]
    fn bounded_out_of_range_is_zero() {
        let mut rng = Lfsr::default();
        let before = rng.state();
        assert_eq!(rng.bounded(0), 0);
        assert_eq!(rng.bounded(17), 0);
        assert_eq!(rng.bounded(255), 0);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn entropy_one_complements_then_advances() {
        let mut rng = Lfsr::new(0x1234);
        rng.inject_entropy(true);
        assert_eq!(rng.state(), 0xc2e5);
    }

    #[test]
    fn entropy_zero_only_advances() {
        let mut rng = Lfsr::default();
        rng.inject_entropy(false);
        assert_eq!(rng.state(), 0x82b0);
    }

    #[test]
    fn all_ones_is_not_complemented() {
        let mut rng = Lfsr::new(0xffff);
        rng.inject_entropy(true);
        assert_eq!(rng.state(), 0xcbff);
    }

    #[test]
    fn entropy_never_reaches_zero() {
        let mut rng = Lfsr::default();
        for i in 0..100_000u32 {
            rng.inject_entropy(i % 3 == 0 || i % 7 == 0);
            assert_ne!(rng.state(), 0);
        }
    }

    #[test]
    fn zero_seed_falls_back_to_default() {
        assert_eq!(Lfsr::new(0), Lfsr::default());
    }
}
