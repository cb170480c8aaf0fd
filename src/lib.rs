//! Firefly jar firmware
//!
//! Four animation slots glow and fade across a 12-LED charlieplex matrix,
//! each picking a new random LED after a random dark interval. The
//! hardware-independent parts live here; `hal` holds the ATmega128
//! backends.
#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod config;
pub mod drivers;
pub mod entropy;
pub mod error;
pub mod logger;
pub mod power;
pub mod prng;
pub mod waveform;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use animation::{Cycle, Scheduler, Slot, SlotState};
pub use error::Error;
