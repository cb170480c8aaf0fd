//! Analog noise sampling for the PRNG

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::error::Error;

/// Source of noisy readings. Only the least significant bit is used.
pub trait EntropySource {
    fn sample(&mut self) -> Result<u16, Error>;
}

/// Reads one channel of any `embedded-hal` one-shot ADC, blocking until
/// the conversion completes.
pub struct AdcEntropy<A, ADC, PIN> {
    adc: A,
    pin: PIN,
    _adc: PhantomData<ADC>,
}

impl<A, ADC, PIN> AdcEntropy<A, ADC, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    pub fn new(adc: A, pin: PIN) -> Self {
        Self {
            adc,
            pin,
            _adc: PhantomData,
        }
    }

    pub fn release(self) -> (A, PIN) {
        (self.adc, self.pin)
    }
}

impl<A, ADC, PIN> EntropySource for AdcEntropy<A, ADC, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    fn sample(&mut self) -> Result<u16, Error> {
        nb::block!(self.adc.read(&mut self.pin)).map_err(|_| Error::EntropySample)
    }
}
