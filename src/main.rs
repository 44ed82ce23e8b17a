mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use semdiff::{PlanFile, analyzers, output};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let plan = PlanFile::load(&cli.filename).await?;
    let analyzer = analyzers::get_analyzer("semdiff", cli.client_settings())?;
    let response = analyzer.analyze(&plan, &cli.analyze_config()).await?;

    tracing::debug!(format = %cli.format, "rendering analysis");
    println!("{}", output::render(cli.format, &response)?);

    Ok(())
}
