//! Runs the firefly show on the host and prints one line per lit frame.
//!
//! `cargo run --example firefly_trace -- 2000`

use std::time::Instant;

use embedded_hal_mock::delay::StdSleep;

use fireflies::config::LED_COUNT;
use fireflies::drivers::{DriveLines, LedMatrix, LED_DRIVES};
use fireflies::entropy::EntropySource;
use fireflies::error::Error;
use fireflies::logger::Logger;
use fireflies::power::DelaySleep;
use fireflies::Scheduler;

/// Terminal stand-in for the LED port; accumulates on-time per LED.
#[derive(Default)]
struct TerminalPort {
    direction: u8,
    frame: [u32; LED_COUNT],
}

impl DriveLines for TerminalPort {
    fn set_output(&mut self, mask: u8) {
        if mask == 0 {
            return;
        }
        if let Some(led) = LED_DRIVES
            .iter()
            .position(|d| d.direction == self.direction && d.output == mask)
        {
            self.frame[led] = self.frame[led].wrapping_add(1);
        }
    }

    fn set_direction(&mut self, mask: u8) {
        self.direction = mask;
    }
}

/// Clock jitter as a noise source.
struct ClockNoise {
    start: Instant,
}

impl EntropySource for ClockNoise {
    fn sample(&mut self) -> Result<u16, Error> {
        Ok(self.start.elapsed().subsec_nanos() as u16)
    }
}

struct Stderr;

impl ufmt::uWrite for Stderr {
    type Error = std::convert::Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        eprint!("{}", s);
        Ok(())
    }
}

fn render(frame: &[u32; LED_COUNT]) -> String {
    const SHADES: [char; 5] = [' ', '.', ':', 'o', '@'];
    frame
        .iter()
        .map(|&on| SHADES[((on as usize) * (SHADES.len() - 1) + 254) / 255])
        .collect()
}

fn main() {
    let cycles: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_000);

    let mut scheduler = Scheduler::new(
        LedMatrix::new(TerminalPort::default()),
        DelaySleep::new(StdSleep::new()),
        ClockNoise {
            start: Instant::now(),
        },
        Logger::new(Stderr),
    );
    scheduler.warm_up();

    for cycle in 0..cycles {
        let before = scheduler.matrix().lines().frame;
        let outcome = scheduler.cycle();
        let after = scheduler.matrix().lines().frame;

        let mut frame = [0u32; LED_COUNT];
        for (lit, (a, b)) in frame.iter_mut().zip(after.iter().zip(before.iter())) {
            *lit = a.wrapping_sub(*b);
        }
        if frame.iter().any(|&on| on > 0) {
            println!("{:6} |{}|", cycle, render(&frame));
        } else if outcome.slept > 0 {
            println!("{:6} |{:^12}| slept {}", cycle, "", outcome.slept);
        }
    }
}
