use clap::Parser;
use retrieve_sequences::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("retrieve_sequences=debug,info")
    } else {
        EnvFilter::new("retrieve_sequences=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::retrieve::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
