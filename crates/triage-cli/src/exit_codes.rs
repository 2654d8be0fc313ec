//! Unified exit codes for the triage CLI.
//! These codes are part of the public contract: a rejected input is
//! distinguishable from a failed batch.

pub const SUCCESS: i32 = 0;
pub const BATCH_FAILED: i32 = 1; // Oracle trouble aborted the batch
pub const CONFIG_ERROR: i32 = 2; // Invalid input, config, or credentials
