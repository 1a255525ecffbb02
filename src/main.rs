mod cli;
mod config;
mod service;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use ui::Output;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        Output::new().error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { local } => service::init::initialize(local),
        Commands::Add {
            text,
            image,
            local,
            global,
        } => service::add::add(text, image, local, global),
        Commands::List {
            month,
            liked,
            limit,
            local,
            global,
        } => service::list::list(month.as_deref(), liked, limit, local, global),
        Commands::Show {
            id,
            export_image,
            local,
            global,
        } => service::show::show(id, export_image, local, global),
        Commands::Like { id, local, global } => service::like::like(id, local, global),
        Commands::Activity { age, category } => service::activity::activity(age, category),
        Commands::Question { random } => service::question::question(random),
    }
}
