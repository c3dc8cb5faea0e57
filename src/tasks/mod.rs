//! Background Tasks Module
//!
//! Long-running maintenance tasks spawned at startup.

mod sweeper;

pub use sweeper::spawn_sweep_task;
