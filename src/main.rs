use chainbot::adapters::StdoutTransport;
use chainbot::config::toml_file::EndpointsFile;
use chainbot::core::dispatch;
use chainbot::domain::ports::Transport;
use chainbot::utils::{logger, validation::Validate};
use chainbot::{BotConfig, HttpFetcher};
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = BotConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting chainbot");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Some(path) = config.config_file.clone() {
        match EndpointsFile::from_file(&path) {
            Ok(file) => file.apply(&mut config),
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", path, e);
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(config.request_timeout_secs))?;
    let transport = StdoutTransport;

    let command = config.command.clone();
    let args = config.args.clone();
    let messages = dispatch::handle_command(&config, &fetcher, &command, &args).await;

    for message in &messages {
        transport.send(message).await?;
    }

    tracing::info!("Replied with {} message(s)", messages.len());
    Ok(())
}
