use avr_device::atmega128::PORTC;
use core::marker::PhantomData;

use crate::drivers::led_matrix::DriveLines;

/// Whole-port access for the charlieplex lines. Writes go straight to the
/// data direction and output registers, one register per call.
pub struct PortLines<PORT> {
    _port: PhantomData<PORT>,
}

macro_rules! impl_port_lines {
    ($PORT:ident, $ddr:ident, $port:ident) => {
        impl PortLines<$PORT> {
            /// Takes the port peripheral so nothing else drives it.
            pub fn new(_port: $PORT) -> Self {
                Self { _port: PhantomData }
            }
        }

        impl DriveLines for PortLines<$PORT> {
            #[inline]
            fn set_output(&mut self, mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$port.write(|w| w.bits(mask));
                }
            }

            #[inline]
            fn set_direction(&mut self, mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$ddr.write(|w| w.bits(mask));
                }
            }
        }
    };
}

impl_port_lines!(PORTC, ddrc, portc);

pub mod board {
    use super::*;

    /// Charlieplex lines on PC1..PC4
    pub type MatrixLines = PortLines<PORTC>;
}
