//! CLI entry point - the composition root.
//!
//! Wires the reqwest-backed BDL client into the export pipeline. Any error
//! ends the run with a message on stderr and a non-zero exit code.

use anyhow::Context;
use bdl_client::DefaultBdlClient;
use clap::Parser;

use bdl_cli::{Cli, init_tracing, print_page_progress, run_export};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so it can supply BDL_API_KEY and friends
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config();
    let client = DefaultBdlClient::new(&config.client)
        .context("Failed to set up BDL client")?
        .with_page_observer(print_page_progress);
    let mut rng = config.rng();

    run_export(&client, &config, &mut rng).await?;
    Ok(())
}
