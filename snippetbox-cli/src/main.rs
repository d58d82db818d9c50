//! snippetbox - serve short-lived text snippets over HTTP
//!
//! Configuration comes from flags, environment variables, or a `.env` file
//! in the working directory, in that order of precedence.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

use serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "snippetbox",
    author,
    version,
    about = "Store and share short-lived text snippets"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug }).ok();

    serve::run_serve(cli.serve).await
}
