//! Charlieplexed LED matrix: 12 LEDs on four shared lines

use crate::config::LED_COUNT;
use crate::error::Error;

/// Direction value that drives every line of the port low.
const PARKED_DIRECTION: u8 = 0xff;

/// Raw access to the shared drive lines.
///
/// Output and direction are separate writes so the matrix can order them:
/// output is always cleared before direction changes, otherwise a stale
/// high output briefly lands on the newly enabled pair.
pub trait DriveLines {
    fn set_output(&mut self, mask: u8);
    fn set_direction(&mut self, mask: u8);
}

/// Direction/output pair that lights one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drive {
    pub direction: u8,
    pub output: u8,
}

impl Drive {
    pub const OFF: Drive = Drive {
        direction: 0,
        output: 0,
    };

    const fn new(direction: u8, output: u8) -> Self {
        Self { direction, output }
    }

    #[inline]
    pub fn is_off(&self) -> bool {
        self.direction == 0
    }
}

impl Default for Drive {
    fn default() -> Self {
        Self::OFF
    }
}

/// Line pairs for each LED. Each pair drives one line high and one low;
/// the other two lines float.
pub const LED_DRIVES: [Drive; LED_COUNT] = [
    Drive::new(0x06, 0x02),
    Drive::new(0x06, 0x04),
    Drive::new(0x18, 0x08),
    Drive::new(0x18, 0x10),
    Drive::new(0x0c, 0x04),
    Drive::new(0x0c, 0x08),
    Drive::new(0x12, 0x02),
    Drive::new(0x12, 0x10),
    Drive::new(0x14, 0x04),
    Drive::new(0x14, 0x10),
    Drive::new(0x0a, 0x02),
    Drive::new(0x0a, 0x08),
];

/// Index of one LED in the matrix, always below `LED_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Folds any raw number onto the matrix.
    pub const fn wrapping(led: u8) -> Self {
        LedIndex(led % LED_COUNT as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn drive(self) -> Drive {
        LED_DRIVES[usize::from(self.0)]
    }

    /// Every LED in index order.
    pub fn all() -> impl Iterator<Item = LedIndex> {
        (0..LED_COUNT as u8).map(LedIndex)
    }
}

impl TryFrom<u8> for LedIndex {
    type Error = Error;

    fn try_from(led: u8) -> Result<Self, Self::Error> {
        if usize::from(led) < LED_COUNT {
            Ok(LedIndex(led))
        } else {
            Err(Error::LedOutOfRange(led))
        }
    }
}

pub struct LedMatrix<P> {
    lines: P,
}

impl<P: DriveLines> LedMatrix<P> {
    pub fn new(lines: P) -> Self {
        let mut matrix = Self { lines };
        matrix.all_off();
        matrix
    }

    /// Lights exactly `led`.
    #[inline]
    pub fn illuminate(&mut self, led: LedIndex) {
        self.apply(led.drive());
    }

    /// Clears output, then sets direction, then output.
    #[inline]
    pub fn apply(&mut self, drive: Drive) {
        self.lines.set_output(0);
        self.lines.set_direction(drive.direction);
        self.lines.set_output(drive.output);
    }

    /// Releases every line (high impedance).
    #[inline]
    pub fn all_off(&mut self) {
        self.apply(Drive::OFF);
    }

    /// Drives every line low. Floating inputs leak while the CPU sleeps,
    /// so this is the state to hold across a deep sleep.
    pub fn park(&mut self) {
        self.lines.set_output(0);
        self.lines.set_direction(PARKED_DIRECTION);
    }

    pub fn lines(&self) -> &P {
        &self.lines
    }

    pub fn release(self) -> P {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Write {
        Output(u8),
        Direction(u8),
    }

    #[derive(Default)]
    struct RecordingLines {
        writes: Vec<Write>,
        output: u8,
        direction: u8,
    }

    impl DriveLines for RecordingLines {
        fn set_output(&mut self, mask: u8) {
            self.output = mask;
            self.writes.push(Write::Output(mask));
        }

        fn set_direction(&mut self, mask: u8) {
            self.direction = mask;
            self.writes.push(Write::Direction(mask));
        }
    }

    fn matrix() -> LedMatrix<RecordingLines> {
        let mut matrix = LedMatrix::new(RecordingLines::default());
        matrix.lines.writes.clear();
        matrix
    }

    #[test]
    fn illuminate_clears_output_before_direction() {
        let mut matrix = matrix();
        let led = LedIndex::try_from(7).unwrap();
        matrix.illuminate(led);
        assert_eq!(
            matrix.lines().writes,
            vec![
                Write::Output(0),
                Write::Direction(0x12),
                Write::Output(0x10)
            ]
        );
    }

    #[test]
    fn all_off_after_illuminate_leaves_nothing_asserted() {
        let mut matrix = matrix();
        for led in LedIndex::all() {
            matrix.illuminate(led);
            matrix.all_off();
            assert_eq!(matrix.lines().output, 0);
            assert_eq!(matrix.lines().direction, 0);
        }
    }

    #[test]
    fn every_led_has_a_distinct_pair() {
        for (i, drive) in LED_DRIVES.iter().enumerate() {
            assert_eq!(drive.direction.count_ones(), 2, "led {}", i);
            assert_eq!(drive.output.count_ones(), 1, "led {}", i);
            assert_eq!(drive.direction & drive.output, drive.output, "led {}", i);
            assert_eq!(drive.direction & !0x1e, 0, "led {}", i);
            for other in &LED_DRIVES[i + 1..] {
                assert_ne!(drive, other);
            }
        }
    }

    #[test]
    fn park_drives_lines_low() {
        let mut matrix = matrix();
        matrix.illuminate(LedIndex::try_from(0).unwrap());
        matrix.park();
        assert_eq!(matrix.lines().output, 0);
        assert_eq!(matrix.lines().direction, 0xff);
    }

    #[test]
    fn index_out_of_range_is_rejected() {
        assert_eq!(LedIndex::try_from(11).map(LedIndex::get), Ok(11));
        assert_eq!(LedIndex::try_from(12), Err(Error::LedOutOfRange(12)));
    }
}
