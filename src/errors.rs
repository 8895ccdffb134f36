use thiserror::Error;

/// Errors raised while resolving command-line input into a configuration.
///
/// Resolution happens before any client is built, so none of these
/// variants ever involve network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The receive utility was started without a queue name.
    #[error("You must supply the name of a queue (-q QUEUE)")]
    MissingQueueName,

    /// The publish utility was started without a message body or topic ARN.
    #[error("You must supply a message and topic ARN\n-m MESSAGE -t TOPIC-ARN")]
    MissingMessageOrTopic,
}

/// Error types for SQS/SNS messaging operations.
///
/// Every remote-call variant is fatal to the running utility: the loop and
/// the publisher report it verbatim and exit with a non-zero status.
#[derive(Debug, Error)]
pub enum AwsMessagingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resolving a queue URL from its name failed.
    #[error("Got an error getting the queue URL: {0}")]
    ChannelAddress(String),

    /// The receive call failed or returned a message that cannot be acknowledged.
    #[error("Got an error receiving messages: {0}")]
    Receive(String),

    /// Deleting a received message failed.
    #[error("failed to delete message: {0}")]
    Acknowledge(String),

    /// Publishing to a topic failed.
    #[error("Got an error publishing the message: {0}")]
    Publish(String),

    /// Writing the report to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_usage_line() {
        let err = AwsMessagingError::from(ConfigError::MissingMessageOrTopic);
        let text = err.to_string();
        assert!(text.contains("-m MESSAGE -t TOPIC-ARN"));
    }

    #[test]
    fn remote_errors_keep_cause_text() {
        let err = AwsMessagingError::ChannelAddress("AWS.SimpleQueueService.NonExistentQueue".into());
        assert_eq!(
            err.to_string(),
            "Got an error getting the queue URL: AWS.SimpleQueueService.NonExistentQueue"
        );
    }
}
