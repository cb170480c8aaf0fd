pub mod adc;
pub mod gpio;
pub mod power;
pub mod timer;
pub mod uart;
pub mod watchdog;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel, PvSense};
pub use gpio::{board, PortLines};
pub use power::{Power, SleepMode};
pub use timer::{CompareTimer, WakeTimer};
pub use uart::Console;
pub use watchdog::Watchdog;
