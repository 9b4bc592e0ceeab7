use anyhow::Result;
use dotenv::dotenv;
use taskdeck::commands::Cli;
use taskdeck::libs::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, it only carries optional overrides
    dotenv().ok();
    logging::init();

    Cli::menu().await
}
