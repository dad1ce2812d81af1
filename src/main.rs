//! Synk CLI entry point.

use clap::Parser;

use synk::cli::{Cli, Commands};
use synk::infrastructure::config::ConfigLoader;
use synk::infrastructure::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => {
            synk::cli::handle_error(err, cli.json);
            return;
        }
    };

    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(err) => {
            synk::cli::handle_error(err, cli.json);
            return;
        }
    };

    let result = match cli.command {
        Commands::Init { force } => synk::cli::commands::init::execute(force, cli.json).await,
        Commands::Run => synk::cli::commands::run::execute(&config).await,
        Commands::Status => synk::cli::commands::status::execute(&config, cli.json).await,
        Commands::History => synk::cli::commands::history::execute(&config, cli.json).await,
        Commands::HelpLines => synk::cli::commands::help_lines::execute(),
        Commands::Reset { yes } => synk::cli::commands::reset::execute(&config, yes, cli.json).await,
    };

    if let Err(err) = result {
        synk::cli::handle_error(err, cli.json);
    }
}
