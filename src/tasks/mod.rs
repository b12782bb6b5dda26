//! Background Tasks Module
//!
//! Optional maintenance tasks for long-running processes.
//!
//! # Tasks
//! - Cache sweep: removes expired cache entries at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
