use async_trait::async_trait;

use crate::errors::AwsMessagingError;

mod aws;

pub use aws::AwsMessageChannel;

/// A single message handed out by a [`MessageChannel`].
///
/// It lives for exactly one poll cycle: it is reported, then acknowledged
/// with its `receipt_handle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Identifier assigned by the service.
    pub id: String,
    /// Message payload; empty when the service returned none.
    pub body: String,
    /// Token used to acknowledge (delete) this delivery.
    pub receipt_handle: String,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        body: impl Into<String>,
        receipt_handle: impl Into<String>,
    ) -> Self {
        Message {
            id: id.into(),
            body: body.into(),
            receipt_handle: receipt_handle.into(),
        }
    }
}

/// Capability over a remote messaging service.
///
/// The poll loop and the publisher only ever talk to this trait, so the
/// AWS SDK adapter can be swapped for a scripted channel in tests.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Resolves the address (queue URL) of a queue from its logical name.
    async fn resolve_address(&self, name: &str) -> Result<String, AwsMessagingError>;

    /// Receives at most one message from `address`, hiding it from other
    /// consumers for `visibility_timeout_seconds`.
    async fn receive_one(
        &self,
        address: &str,
        visibility_timeout_seconds: i32,
    ) -> Result<Option<Message>, AwsMessagingError>;

    /// Acknowledges a delivered message so the service removes it.
    async fn acknowledge(&self, address: &str, receipt_handle: &str)
    -> Result<(), AwsMessagingError>;

    /// Publishes `body` to the topic at `address` and returns the message id.
    async fn publish(&self, address: &str, body: &str) -> Result<String, AwsMessagingError>;
}
