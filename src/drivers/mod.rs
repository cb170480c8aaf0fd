pub mod led_matrix;

pub use led_matrix::{Drive, DriveLines, LedIndex, LedMatrix, LED_DRIVES};
