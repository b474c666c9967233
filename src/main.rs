use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use dieta_lib::bootstrap::{build_runtime, init_tracing_subscriber, load_or_default};
use dieta_lib::terminal::Terminal;

#[derive(Parser)]
#[command(name = "dieta", version, about = "Collect the data for a nutrition plan")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config)?;
    init_tracing_subscriber(&config)?;

    let mut runtime = build_runtime(&config);
    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());

    if let Err(err) = dieta_lib::app::run(&mut runtime, &mut term).await {
        error!(error = %err, "wizard aborted");
        return Err(err);
    }
    Ok(())
}
