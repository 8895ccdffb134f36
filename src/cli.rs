//! Command-line arguments for the `sns-publish` and `sqs-receive` binaries.
//!
//! Required values are declared optional here and validated when the
//! arguments are resolved, so a missing flag is reported with the utility's
//! own usage line and exit status 1 instead of clap's.

use std::time::Duration;

use clap::{Args as ClapArgs, Parser};

use crate::errors::ConfigError;
use crate::publisher::PublishConfig;
use crate::receiver::{DEFAULT_VISIBILITY_TIMEOUT_SECONDS, PollConfig};

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:4566";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Connection flags shared by both utilities.
#[derive(Clone, Debug, ClapArgs)]
pub struct EndpointArgs {
    /// The LocalStack url; pass an empty value to use the AWS default endpoint
    #[arg(short = 'u', env = "LOCALSTACK_URL", default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint_url: String,

    /// The region of LocalStack
    #[arg(short = 'r', env = "LOCALSTACK_REGION", default_value = DEFAULT_REGION)]
    pub region: String,
}

/// Publish a message to an SNS topic.
#[derive(Parser, Debug)]
#[command(name = "sns-publish", version, about)]
pub struct PublishArgs {
    /// The message to send to the subscribed users of the topic
    #[arg(short = 'm', value_name = "MESSAGE")]
    pub message: Option<String>,

    /// The ARN of the topic to which the users subscribe
    #[arg(short = 't', value_name = "TOPIC-ARN")]
    pub topic_arn: Option<String>,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

impl PublishArgs {
    pub fn resolve(self) -> Result<PublishConfig, ConfigError> {
        PublishConfig::new(
            self.endpoint.region,
            self.topic_arn.unwrap_or_default(),
            self.endpoint.endpoint_url,
            self.message.unwrap_or_default(),
        )
    }
}

/// Poll an SQS queue, printing and deleting one message at a time.
#[derive(Parser, Debug)]
#[command(name = "sqs-receive", version, about)]
pub struct ReceiveArgs {
    /// The name of the queue
    #[arg(short = 'q', value_name = "QUEUE")]
    pub queue_name: Option<String>,

    /// How long, in seconds, that the message is hidden from others (clamped to 0..=43200)
    #[arg(
        short = 't',
        value_name = "SECONDS",
        default_value_t = DEFAULT_VISIBILITY_TIMEOUT_SECONDS,
        allow_negative_numbers = true
    )]
    pub visibility_timeout: i64,

    /// Pause between poll cycles in milliseconds; 0 polls continuously
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub poll_interval_ms: u64,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

impl ReceiveArgs {
    pub fn resolve(self) -> Result<PollConfig, ConfigError> {
        PollConfig::new(
            self.endpoint.region,
            self.queue_name.unwrap_or_default(),
            self.endpoint.endpoint_url,
            self.visibility_timeout,
            Duration::from_millis(self.poll_interval_ms),
        )
    }
}
