//! Configuration constants for the firefly firmware

use crate::power::SleepStep;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Precise timer rate (Timer1, CPU clock / 8)
pub const TIMER_TICK_HZ: u32 = CPU_FREQ_HZ / 8;

/// UART baud rate for the debug event log
pub const UART_BAUD: u32 = 9600;

/// Number of independently animated slots
pub const NUM_SLOTS: usize = 4;

/// LEDs wired into the charlieplex matrix
pub const LED_COUNT: usize = 12;

/// Ramp steps in one PWM period, also the waveform length
pub const RAMP_STEPS: usize = 255;

/// Precise wait before each slot sample inside a burst, in timer ticks
pub const SLOT_WAIT_TICKS: u16 = 13;

/// Width of each of the two random draws summed into a dark interval.
/// 11 bits gives roughly six flies per minute.
pub const DELAY_RANDOM_BITS: u8 = 11;

/// Mask applied to the re-arm offset draw (0..=7)
pub const REARM_OFFSET_MASK: u8 = 0x07;

/// Analog samples taken before the first burst
pub const ENTROPY_WARMUP_SAMPLES: u8 = 8;

/// LFSR start state
pub const LFSR_SEED: u16 = 0x6d61;

/// LFSR feedback taps (x^16 + x^14 + x^13 + x^11 + 1)
pub const LFSR_TAPS: u16 = 0xB400;

/// Coarse sleep step used while every slot is dark. Close to one logic
/// tick but uncalibrated.
pub const IDLE_SLEEP_STEP: SleepStep = SleepStep::Short;

/// Flies assigned to the slots at power-up
pub const INITIAL_FLIES: [u8; NUM_SLOTS] = [0, 3, 6, 9];
