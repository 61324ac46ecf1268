use clap::Parser;
use navigator::app::{handle_fatal_error, init_logging, run, AppConfig};
use navigator::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    init_logging(&config);

    if let Err(e) = run(config).await {
        handle_fatal_error(e, cli.verbose);
    }
}
