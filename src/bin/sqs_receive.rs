use std::process::ExitCode;

use clap::Parser;
use rs_localstack_messaging::channel::AwsMessageChannel;
use rs_localstack_messaging::cli::ReceiveArgs;
use rs_localstack_messaging::logging;
use rs_localstack_messaging::receiver::run_poll_loop;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let args = ReceiveArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, "resolved poll config");

    let channel = AwsMessageChannel::connect(&config.region, &config.endpoint_url).await;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("interrupt received, stopping after the current cycle");
                signal_token.cancel();
            }
            Err(err) => error!(error = %err, "failed to listen for interrupt"),
        }
    });

    println!("Start listen incoming message");
    let mut stdout = std::io::stdout();

    match run_poll_loop(&channel, &config, &shutdown, &mut stdout).await {
        Ok(()) => {
            println!("app stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
