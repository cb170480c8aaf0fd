use std::env;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();

    // Host builds only run the library tests and demos
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=Event log enabled on USART0");
    }
}
