//! Single-message SQS polling with cooperative shutdown.

mod config;
mod poller;

pub use config::{
    DEFAULT_VISIBILITY_TIMEOUT_SECONDS, MAX_VISIBILITY_TIMEOUT_SECONDS, PollConfig,
    clamp_visibility_timeout,
};
pub use poller::{CycleOutcome, PollState, poll_once, run_poll_loop};
