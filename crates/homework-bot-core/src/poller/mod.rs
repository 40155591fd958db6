mod engine;
mod memory;

pub use engine::{CycleOutcome, PollState, Poller};
pub use memory::PollMemory;
