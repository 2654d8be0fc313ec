//! Progress reporting across a screening batch. The engine emits done/total
//! after each category; front ends consume via a sink. No presentation
//! primitive leaks into the core.

use std::sync::Arc;

/// One progress update: how many categories are done and the batch total.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
}

/// Sink for progress events. The engine calls this once per category, with
/// `done` strictly increasing from 1 to `total` in the sequential mode.
/// Implementations may throttle.
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
