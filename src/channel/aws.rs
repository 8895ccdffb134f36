use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::MessageSystemAttributeName;
use tracing::debug;

use super::{Message, MessageChannel};
use crate::client::{create_sns_client, create_sqs_client, load_sdk_config};
use crate::errors::AwsMessagingError;

/// Requests every user-defined message attribute.
const ALL_MESSAGE_ATTRIBUTES: &str = "All";

/// [`MessageChannel`] backed by the AWS SDK SQS and SNS clients.
#[derive(Debug, Clone)]
pub struct AwsMessageChannel {
    sqs: aws_sdk_sqs::Client,
    sns: aws_sdk_sns::Client,
}

impl AwsMessageChannel {
    pub fn new(sqs: aws_sdk_sqs::Client, sns: aws_sdk_sns::Client) -> Self {
        AwsMessageChannel { sqs, sns }
    }

    /// Builds both clients from one shared configuration targeting `endpoint_url`.
    ///
    /// See [`load_sdk_config`] for how an empty endpoint is handled.
    pub async fn connect(region: &str, endpoint_url: &str) -> Self {
        let config = load_sdk_config(region, endpoint_url).await;
        AwsMessageChannel::new(create_sqs_client(&config), create_sns_client(&config))
    }
}

#[async_trait]
impl MessageChannel for AwsMessageChannel {
    async fn resolve_address(&self, name: &str) -> Result<String, AwsMessagingError> {
        let output = self
            .sqs
            .get_queue_url()
            .queue_name(name)
            .send()
            .await
            .map_err(|e| AwsMessagingError::ChannelAddress(DisplayErrorContext(&e).to_string()))?;

        let url = output
            .queue_url()
            .ok_or_else(|| {
                AwsMessagingError::ChannelAddress(format!("queue url missing for {name}"))
            })?
            .to_string();
        debug!(queue = name, url = %url, "resolved queue url");
        Ok(url)
    }

    async fn receive_one(
        &self,
        address: &str,
        visibility_timeout_seconds: i32,
    ) -> Result<Option<Message>, AwsMessagingError> {
        let output = self
            .sqs
            .receive_message()
            .queue_url(address)
            .max_number_of_messages(1)
            .visibility_timeout(visibility_timeout_seconds)
            .message_attribute_names(ALL_MESSAGE_ATTRIBUTES)
            .message_system_attribute_names(MessageSystemAttributeName::All)
            .send()
            .await
            .map_err(|e| AwsMessagingError::Receive(DisplayErrorContext(&e).to_string()))?;

        let Some(message) = output.messages().first() else {
            return Ok(None);
        };

        let id = message.message_id().unwrap_or("unknown");
        let receipt_handle = message.receipt_handle().ok_or_else(|| {
            AwsMessagingError::Receive(format!("message {id} has no receipt handle"))
        })?;

        Ok(Some(Message::new(
            id,
            message.body().unwrap_or_default(),
            receipt_handle,
        )))
    }

    async fn acknowledge(
        &self,
        address: &str,
        receipt_handle: &str,
    ) -> Result<(), AwsMessagingError> {
        self.sqs
            .delete_message()
            .queue_url(address)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| AwsMessagingError::Acknowledge(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn publish(&self, address: &str, body: &str) -> Result<String, AwsMessagingError> {
        let output = self
            .sns
            .publish()
            .topic_arn(address)
            .message(body)
            .send()
            .await
            .map_err(|e| AwsMessagingError::Publish(DisplayErrorContext(&e).to_string()))?;

        output
            .message_id()
            .map(str::to_string)
            .ok_or_else(|| AwsMessagingError::Publish("message id missing in response".into()))
    }
}
