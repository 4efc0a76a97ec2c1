use toolplot::{init_logging, run, Cli, LogFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging
    init_logging(LogFormat::from_env())?;

    let stats = run(&cli.to_parameters())?;
    tracing::debug!(?stats, "Done");

    Ok(())
}
