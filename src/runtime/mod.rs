//! Runtime module
//!
//! Provides async task execution primitives.

pub mod async_task;

// Re-export async task types
pub use async_task::AsyncTask;
