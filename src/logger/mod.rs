//! Scheduler event log
//!
//! Events are formatted with `ufmt` onto any `uWrite` sink, one line each.
//! The unit type is the silent sink used when the console is compiled out.

use ufmt::{uDisplay, uWrite, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Boot { seed: u16 },
    Rearm { slot: u8, fly: u8, delay: u16 },
    Wake { slot: u8, fly: u8 },
    Sleep { steps: u16 },
    EntropyFault,
}

impl uDisplay for Event {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match *self {
            Event::Boot { seed } => ufmt::uwrite!(f, "boot seed={}", seed),
            Event::Rearm { slot, fly, delay } => {
                ufmt::uwrite!(f, "rearm slot={} fly={} delay={}", slot, fly, delay)
            }
            Event::Wake { slot, fly } => ufmt::uwrite!(f, "wake slot={} fly={}", slot, fly),
            Event::Sleep { steps } => ufmt::uwrite!(f, "sleep steps={}", steps),
            Event::EntropyFault => f.write_str("entropy fault"),
        }
    }
}

pub trait EventSink {
    fn record(&mut self, event: &Event);
}

impl EventSink for () {
    #[inline]
    fn record(&mut self, _event: &Event) {}
}

pub struct Logger<W> {
    out: W,
}

impl<W: uWrite> Logger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn release(self) -> W {
        self.out
    }
}

impl<W: uWrite> EventSink for Logger<W> {
    fn record(&mut self, event: &Event) {
        ufmt::uwrite!(&mut self.out, "[DBG] {}\r\n", event).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Capture(String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn events_render_one_line_each() {
        let mut logger = Logger::new(Capture::default());
        logger.record(&Event::Boot { seed: 0x6d61 });
        logger.record(&Event::Rearm {
            slot: 2,
            fly: 7,
            delay: 1534,
        });
        logger.record(&Event::Sleep { steps: 40 });
        logger.record(&Event::EntropyFault);

        let text = logger.release().0;
        assert_eq!(
            text,
            "[DBG] boot seed=28001\r\n\
             [DBG] rearm slot=2 fly=7 delay=1534\r\n\
             [DBG] sleep steps=40\r\n\
             [DBG] entropy fault\r\n"
        );
    }
}
