use std::io::Write;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::config::PollConfig;
use crate::channel::MessageChannel;
use crate::errors::AwsMessagingError;

/// Lifecycle of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Cycles are being executed.
    Running,
    /// Shutdown was requested; no further cycle will start.
    Stopping,
    /// The loop is done, carrying the process exit status.
    Terminated(i32),
}

/// Result of a single successful poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The queue had nothing to deliver.
    NoMessage,
    /// A message was reported and deleted.
    Acknowledged { id: String },
}

/// Runs one resolve, receive, report, acknowledge cycle.
///
/// The message is written to `out` and flushed before the acknowledge call
/// is issued, so it stays visible even when the delete fails and the message
/// remains in flight on the queue.
pub async fn poll_once<C, W>(
    channel: &C,
    config: &PollConfig,
    out: &mut W,
) -> Result<CycleOutcome, AwsMessagingError>
where
    C: MessageChannel + ?Sized,
    W: Write,
{
    let queue_url = channel.resolve_address(&config.queue_name).await?;

    let Some(message) = channel
        .receive_one(&queue_url, config.visibility_timeout_seconds)
        .await?
    else {
        return Ok(CycleOutcome::NoMessage);
    };

    writeln!(out, "Message received")?;
    writeln!(out, "Message ID:     {}", message.id)?;
    writeln!(out, "Message Body: {}", message.body)?;
    out.flush()?;

    channel
        .acknowledge(&queue_url, &message.receipt_handle)
        .await?;
    writeln!(out, "Message successfully deleted")?;

    Ok(CycleOutcome::Acknowledged { id: message.id })
}

/// Polls `channel` one message at a time until `shutdown` is cancelled.
///
/// Cancellation is checked once at the top of every iteration; a cycle that
/// is already in flight runs to completion. The first failing cycle ends the
/// loop and its error is returned without any retry.
pub async fn run_poll_loop<C, W>(
    channel: &C,
    config: &PollConfig,
    shutdown: &CancellationToken,
    out: &mut W,
) -> Result<(), AwsMessagingError>
where
    C: MessageChannel + ?Sized,
    W: Write,
{
    let mut state = PollState::Running;
    let mut failure = None;

    loop {
        state = match state {
            PollState::Running if shutdown.is_cancelled() => {
                info!("shutdown requested, stopping poll loop");
                PollState::Stopping
            }
            PollState::Running => match poll_once(channel, config, out).await {
                Ok(outcome) => {
                    debug!(?outcome, "poll cycle finished");
                    pause(config.poll_interval, shutdown).await;
                    PollState::Running
                }
                Err(err) => {
                    error!(error = %err, queue = %config.queue_name, "poll cycle failed");
                    failure = Some(err);
                    PollState::Terminated(1)
                }
            },
            PollState::Stopping => PollState::Terminated(0),
            PollState::Terminated(code) => {
                debug!(code, "poll loop terminated");
                break;
            }
        };
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Waits between cycles, returning early if shutdown is requested.
async fn pause(interval: Duration, shutdown: &CancellationToken) {
    if interval.is_zero() {
        // Lets the signal task run on a single-threaded runtime.
        tokio::task::yield_now().await;
        return;
    }

    tokio::select! {
        _ = shutdown.cancelled() => {}
        _ = tokio::time::sleep(interval) => {}
    }
}
