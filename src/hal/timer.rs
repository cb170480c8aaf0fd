use avr_device::atmega128::{TC0, TC1};

use crate::power::SleepStep;

const OCIE0: u8 = 1 << 1;
const OCIE1A: u8 = 1 << 4;
const OCF1A: u8 = 1 << 4;

const AS0: u8 = 1 << 3;
const ASSR_BUSY: u8 = 0x07;
const WGM01: u8 = 1 << 3;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

/// Timer1 free-running at CPU/8, used for compare-match waits.
pub struct CompareTimer {
    _tc1: TC1,
}

impl CompareTimer {
    pub fn new(tc1: TC1) -> Self {
        unsafe {
            let p = TC1::ptr();
            // Normal mode, counting continuously
            (*p).tccr1a.write(|w| w.bits(0));
            (*p).tccr1b.write(|w| w.bits(Prescaler::Div8 as u8));
        }
        Self { _tc1: tc1 }
    }

    /// Arms compare A `ticks` from now and enables its interrupt.
    #[inline]
    pub fn arm(&mut self, ticks: u16) {
        unsafe {
            let p = TC1::ptr();
            let now = (*p).tcnt1.read().bits();
            (*p).ocr1a.write(|w| w.bits(now.wrapping_add(ticks)));

            let t = TC0::ptr();
            (*t).tifr.write(|w| w.bits(OCF1A));
            (*t).timsk.modify(|r, w| w.bits(r.bits() | OCIE1A));
        }
    }

    #[inline]
    pub fn disarm(&mut self) {
        unsafe {
            let t = TC0::ptr();
            (*t).timsk.modify(|r, w| w.bits(r.bits() & !OCIE1A));
        }
    }
}

/// Timer0 clocked from the 32.768 kHz crystal on TOSC1. Keeps running in
/// power-save sleep and wakes the CPU on compare match.
pub struct WakeTimer {
    _tc0: TC0,
}

impl WakeTimer {
    pub fn new(tc0: TC0) -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).timsk.modify(|r, w| w.bits(r.bits() & !OCIE0));
            (*p).assr.write(|w| w.bits(AS0));
            (*p).tccr0.write(|w| w.bits(WGM01));
        }
        Self { _tc0: tc0 }
    }

    /// Clock select and compare value for one step.
    fn setting(step: SleepStep) -> (u8, u8) {
        match step {
            // 32768 / 8 = 4096 Hz, 51 counts
            SleepStep::Short => (0x02, 50),
            // 32768 / 64 = 512 Hz, 51 counts
            SleepStep::Medium => (0x04, 50),
            // 32768 / 256 = 128 Hz, 102 counts
            SleepStep::Long => (0x06, 101),
            // 32768 / 1024 = 32 Hz, 205 counts
            SleepStep::VeryLong => (0x07, 204),
        }
    }

    /// Restarts the count for `step` and enables the compare interrupt.
    pub fn arm(&mut self, step: SleepStep) {
        let (clock, top) = Self::setting(step);
        unsafe {
            let p = TC0::ptr();
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).ocr0.write(|w| w.bits(top));
            (*p).tccr0.write(|w| w.bits(WGM01 | clock));

            // Asynchronous writes must land before power-save or the
            // timer stalls with the old setting
            while (*p).assr.read().bits() & ASSR_BUSY != 0 {}

            (*p).timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
        }
    }

    pub fn disarm(&mut self) {
        unsafe {
            let p = TC0::ptr();
            (*p).timsk.modify(|r, w| w.bits(r.bits() & !OCIE0));
        }
    }
}
