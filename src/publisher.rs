//! One-shot publishing to an SNS topic.

use tracing::debug;

use crate::channel::MessageChannel;
use crate::errors::{AwsMessagingError, ConfigError};

/// Configuration for a single publish call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    pub region: String,
    pub topic_arn: String,
    pub endpoint_url: String,
    pub message: String,
}

impl PublishConfig {
    /// Validates raw inputs; both the message and the topic ARN must be non-empty.
    pub fn new(
        region: impl Into<String>,
        topic_arn: impl Into<String>,
        endpoint_url: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let topic_arn = topic_arn.into();
        let message = message.into();
        if message.is_empty() || topic_arn.is_empty() {
            return Err(ConfigError::MissingMessageOrTopic);
        }

        Ok(PublishConfig {
            region: region.into(),
            topic_arn,
            endpoint_url: endpoint_url.into(),
            message,
        })
    }
}

/// Publishes the configured message and returns the id assigned by the service.
pub async fn publish_message<C>(
    channel: &C,
    config: &PublishConfig,
) -> Result<String, AwsMessagingError>
where
    C: MessageChannel + ?Sized,
{
    let message_id = channel.publish(&config.topic_arn, &config.message).await?;
    debug!(topic = %config.topic_arn, message_id = %message_id, "published message");
    Ok(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_rejected() {
        let result = PublishConfig::new(
            "us-east-1",
            "arn:aws:sns:us-east-1:000000000000:orders",
            "http://localhost:4566",
            "",
        );
        assert_eq!(result, Err(ConfigError::MissingMessageOrTopic));
    }

    #[test]
    fn empty_topic_is_rejected() {
        let result = PublishConfig::new("us-east-1", "", "http://localhost:4566", "hello");
        assert_eq!(result, Err(ConfigError::MissingMessageOrTopic));
    }
}
