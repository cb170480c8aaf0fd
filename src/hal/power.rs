use avr_device::atmega128::CPU;

use crate::hal::timer::{CompareTimer, WakeTimer};
use crate::power::{SleepManager, SleepStep};

const SE: u8 = 1 << 5;
const SM_MASK: u8 = 0x1c;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
    AdcNoiseReduction = 1,
    PowerDown = 2,
    PowerSave = 3,
    Standby = 6,
    ExtendedStandby = 7,
}

impl SleepMode {
    /// MCUCR layout on this part: SM1:SM0 in bits 4:3, SM2 in bit 2.
    #[inline]
    fn mcucr_bits(self) -> u8 {
        let mode = self as u8;
        ((mode & 0x03) << 3) | (((mode >> 2) & 0x01) << 2)
    }
}

/// Sleep with the given mode until the next enabled interrupt. Interrupts
/// are enabled immediately before `sleep`, so a wake event pending at that
/// point still ends the sleep.
#[inline]
pub fn sleep_in(mode: SleepMode) {
    unsafe {
        let p = CPU::ptr();
        (*p).mcucr
            .modify(|r, w| w.bits((r.bits() & !SM_MASK) | mode.mcucr_bits() | SE));
        avr_device::interrupt::enable();
    }
    avr_device::asm::sleep();
    unsafe {
        let p = CPU::ptr();
        (*p).mcucr.modify(|r, w| w.bits(r.bits() & !SE));
    }
}

/// Timer-driven waits. Idle sleep on Timer1 compare for the fine waits,
/// power-save sleep on the asynchronous Timer0 for the coarse ones.
pub struct Power {
    compare: CompareTimer,
    wake: WakeTimer,
}

impl Power {
    pub fn new(compare: CompareTimer, wake: WakeTimer) -> Self {
        Self { compare, wake }
    }
}

impl SleepManager for Power {
    fn precise_wait(&mut self, ticks: u16) {
        avr_device::interrupt::disable();
        self.compare.arm(ticks);
        sleep_in(SleepMode::Idle);
        self.compare.disarm();
    }

    fn deep_sleep(&mut self, step: SleepStep) {
        avr_device::interrupt::disable();
        self.wake.arm(step);
        sleep_in(SleepMode::PowerSave);
        self.wake.disarm();
    }
}
