#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128::Peripherals;
    use fireflies::drivers::LedMatrix;
    use fireflies::entropy::AdcEntropy;
    use fireflies::hal::{board, Adc, CompareTimer, Power, PvSense, WakeTimer, Watchdog};
    use fireflies::Scheduler;

    #[cfg(feature = "debug")]
    type Events = fireflies::logger::Logger<fireflies::hal::Console>;
    #[cfg(not(feature = "debug"))]
    type Events = ();

    #[avr_device::entry]
    fn main() -> ! {
        // Only taken once, at reset
        let dp = match Peripherals::take() {
            Some(dp) => dp,
            None => loop {},
        };

        Watchdog::new(dp.WDT).disable();

        let matrix = LedMatrix::new(board::MatrixLines::new(dp.PORTC));
        let power = Power::new(CompareTimer::new(dp.TC1), WakeTimer::new(dp.TC0));
        let entropy = AdcEntropy::new(Adc::new(dp.ADC), PvSense);

        #[cfg(feature = "debug")]
        let events: Events = fireflies::logger::Logger::new(fireflies::hal::Console::new(dp.USART0));
        #[cfg(not(feature = "debug"))]
        let events: Events = ();

        Scheduler::new(matrix, power, entropy, events).run()
    }

    // Wake sources. The handlers only end the current sleep.

    #[avr_device::interrupt(atmega128)]
    fn TIMER1_COMPA() {}

    #[avr_device::interrupt(atmega128)]
    fn TIMER0_COMP() {}

    #[avr_device::interrupt(atmega128)]
    fn ADC() {}
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("fireflies: firmware image, build with --target avr-atmega128");
}
