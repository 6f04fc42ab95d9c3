use clap::Parser;
use colored::Colorize;

use shorturl::cli::{Cli, Commands, generate_config};
use shorturl::config::{get_config, init_config};
use shorturl::errors::ShortUrlError;
use shorturl::runtime::modes::run_server;
use shorturl::system::init_logging;

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(Commands::GenerateConfig { output }) = &cli.command {
        if let Err(e) = generate_config(output.as_deref()) {
            eprintln!("{} {}", "Error:".bold().red(), e);
            std::process::exit(1);
        }
        return;
    }

    // Server mode
    init_config(Some(cli.config_path()));
    let config = get_config();

    // guard 需要存活到进程结束，否则缓冲中的日志会丢失
    let log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {}", "Failed to initialize logging:".bold().red(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_server().await {
        tracing::error!("Server exited with error: {:#}", e);
        drop(log_guard);
        match e.downcast_ref::<ShortUrlError>() {
            Some(err) => eprintln!("{}", err.format_colored()),
            None => eprintln!("{} {:#}", "Error:".bold().red(), e),
        }
        std::process::exit(1);
    }

    drop(log_guard);
}
