use clap::Parser;
use vetrine::cli::{
    commands::{build::BuildCommand, CommandHandler},
    logging::initialize_tracing,
    Cli,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level);

    let command = BuildCommand::new(cli.catalog_config(), cli.dry_run);
    tracing::debug!("Running {} command", command.name());
    command.execute()?;

    Ok(())
}
