use std::process::ExitCode;

use clap::Parser;
use rs_localstack_messaging::channel::AwsMessageChannel;
use rs_localstack_messaging::cli::PublishArgs;
use rs_localstack_messaging::logging;
use rs_localstack_messaging::publisher::publish_message;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let args = PublishArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, "resolved publish config");

    let channel = AwsMessageChannel::connect(&config.region, &config.endpoint_url).await;

    match publish_message(&channel, &config).await {
        Ok(message_id) => {
            println!("Message ID: {message_id}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
