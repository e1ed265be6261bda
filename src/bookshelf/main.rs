use bookshelf::config::ServerConfig;
use bookshelf::error::Result;
use bookshelf::{http, logging};
use clap::Parser;

mod args;
use args::{Cli, Commands, ConfigCommand, ServeArgs};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let load = || ServerConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Serve(ref args)) => handle_serve(load()?, args).await,
        Some(Commands::Config(ConfigCommand::Gen)) => handle_config_gen(),
        Some(Commands::Config(ConfigCommand::Show)) => handle_config_show(&load()?),
        None => handle_serve(load()?, &ServeArgs::default()).await,
    }
}

async fn handle_serve(config: ServerConfig, args: &ServeArgs) -> Result<()> {
    let config = config.with_overrides(args.host.clone(), args.port);
    logging::init(&config.log_filter);
    tracing::debug!(?config, "configuration resolved");
    http::serve(config).await
}

fn handle_config_gen() -> Result<()> {
    print!("{}", ServerConfig::template());
    Ok(())
}

fn handle_config_show(config: &ServerConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
