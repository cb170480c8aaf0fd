use avr_device::atmega128::WDT;

/// The watchdog on this part can only reset, so it is held off and the
/// asynchronous Timer0 wakes the CPU instead.
pub struct Watchdog {
    _wdt: WDT,
}

impl Watchdog {
    #[inline]
    pub fn new(wdt: WDT) -> Self {
        Self { _wdt: wdt }
    }

    #[inline]
    pub fn disable(&mut self) {
        unsafe {
            let p = WDT::ptr();
            // Timed sequence to disable watchdog
            (*p).wdtcr.write(|w| w.bits(0x18));
            (*p).wdtcr.write(|w| w.bits(0x00));
        }
    }
}
