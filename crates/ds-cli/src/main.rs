use anyhow::Context;
use clap::Parser;

mod cli;
mod dump;
mod walk;

fn main() {
    if let Err(error) = run() {
        eprintln!("dumpstructs error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ds_config::DumpConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    dump::dump(&config, &mut out)?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DUMPSTRUCTS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
