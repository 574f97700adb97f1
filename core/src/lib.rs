//! Tick-synchronized event capture and session recording for a live
//! simulation client.
//!
//! Notifications land in per-category buffers, the aggregator folds them
//! into one record per tick, and the operator saves sessions to disk.

pub mod aggregator;
pub mod buffer;
pub mod command;
pub mod config;
pub mod control;
pub mod drop_capture;
pub mod engine;
pub mod error;
pub mod event;
pub mod record;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod types;

pub use engine::Recorder;
pub use error::{TraceError, TraceResult};
