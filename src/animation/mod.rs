pub mod scheduler;
pub mod slot;

pub use scheduler::{Cycle, Scheduler};
pub use slot::{Slot, SlotState};
