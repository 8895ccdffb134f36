use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads the shared SDK configuration for a region and endpoint override.
///
/// Credentials are resolved through the default provider chain, so the usual
/// environment variables apply:
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_PROFILE`
///
/// An empty `endpoint_url` leaves endpoint resolution to the SDK, which
/// targets the real AWS endpoint for `region`. Any other value (for example
/// `http://localhost:4566`) routes every service call to that URL.
///
/// # Example
///
/// ```rust,no_run
/// use rs_localstack_messaging::client::load_sdk_config;
///
/// #[tokio::main]
/// async fn main() {
///     let config = load_sdk_config("us-east-1", "http://localhost:4566").await;
///     let sqs = aws_sdk_sqs::Client::new(&config);
///     // Use the client...
/// }
/// ```
pub async fn load_sdk_config(region: &str, endpoint_url: &str) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

    if !endpoint_url.is_empty() {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}

/// Creates an SQS client from a loaded SDK configuration.
pub fn create_sqs_client(config: &SdkConfig) -> aws_sdk_sqs::Client {
    aws_sdk_sqs::Client::new(config)
}

/// Creates an SNS client from a loaded SDK configuration.
pub fn create_sns_client(config: &SdkConfig) -> aws_sdk_sns::Client {
    aws_sdk_sns::Client::new(config)
}
