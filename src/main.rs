use clap::Parser;
use tracing_subscriber::EnvFilter;

mod alignment;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("nw_align=debug,info")
    } else {
        EnvFilter::new("nw_align=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Table(args) => {
            cli::table::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pair(args) => {
            cli::pair::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
