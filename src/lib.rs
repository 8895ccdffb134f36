//! # LocalStack Messaging
//!
//! Small command-line tools for exercising SNS and SQS against LocalStack (or
//! any endpoint speaking the same protocol).
//!
//! ## Features
//!
//! - `sns-publish`: publish one message to a topic and print its id
//! - `sqs-receive`: poll a queue one message at a time, print and delete it
//! - Trait-based [`channel::MessageChannel`] so the poll loop runs against any backend
//! - Cooperative shutdown: Ctrl+C is observed between cycles, never mid-call
//! - Fail-fast: the first remote error stops the loop with a non-zero status
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_localstack_messaging::channel::AwsMessageChannel;
//! use rs_localstack_messaging::receiver::{PollConfig, run_poll_loop};
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PollConfig::new(
//!         "us-east-1",
//!         "orders",
//!         "http://localhost:4566",
//!         5,
//!         Duration::ZERO,
//!     )?;
//!     let channel = AwsMessageChannel::connect(&config.region, &config.endpoint_url).await;
//!     let shutdown = CancellationToken::new();
//!
//!     run_poll_loop(&channel, &config, &shutdown, &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod cli;
pub mod client;
pub mod errors;
pub mod logging;
pub mod publisher;
pub mod receiver;
