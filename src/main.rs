use activity_board::cli;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
