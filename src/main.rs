use clap::Parser;
use datepoll::app::{handle_fatal_error, init_logging, AppConfig};
use datepoll::cli::args::Cli;
use datepoll::cli::router::execute_command;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose).with_config_path(cli.config);
    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config).await {
        handle_fatal_error(e, config.verbose);
    }
}
