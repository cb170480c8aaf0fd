use avr_device::atmega128::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

use crate::hal::power::{sleep_in, SleepMode};

const ADEN: u8 = 0x80;
const ADSC: u8 = 0x40;
const ADIE: u8 = 0x08;
const PRESCALER_DIV128: u8 = 0x07;
const REFS_AVCC: u8 = 0x40;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

/// Photovoltaic sense input. Its noisy low bit seeds the PRNG.
pub struct PvSense;

impl Channel<Adc> for PvSense {
    type ID = u8;

    fn channel() -> u8 {
        AdcChannel::Adc1 as u8
    }
}

/// Single conversions taken in ADC noise-reduction sleep, woken by the
/// conversion-complete interrupt.
pub struct Adc {
    _adc: ADC,
}

impl Adc {
    pub fn new(adc: ADC) -> Self {
        unsafe {
            let p = ADC::ptr();
            (*p).adcsra.write(|w| w.bits(ADEN | ADIE | PRESCALER_DIV128));
            (*p).admux.write(|w| w.bits(REFS_AVCC));
        }
        Self { _adc: adc }
    }

    fn select(&mut self, channel: u8) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xE0) | (channel & 0x07)));
        }
    }

    fn busy(&self) -> bool {
        unsafe { (*ADC::ptr()).adcsra.read().bits() & ADSC != 0 }
    }

    fn result(&self) -> u16 {
        unsafe {
            let p = ADC::ptr();
            // ADCL must be read first
            let low = (*p).adcl.read().bits() as u16;
            let high = (*p).adch.read().bits() as u16;
            (high << 8) | low
        }
    }
}

impl<PIN: Channel<Adc, ID = u8>> OneShot<Adc, u16, PIN> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut PIN) -> nb::Result<u16, Self::Error> {
        avr_device::interrupt::disable();
        self.select(PIN::channel());
        // Entering noise-reduction sleep starts the conversion
        sleep_in(SleepMode::AdcNoiseReduction);
        if self.busy() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.result())
    }
}
