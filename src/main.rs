use anyhow::Result;
use folder2md::cli::{init_logging, parse_args};
use folder2md::run_folder2md;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = parse_args()?;
    init_logging(config.verbosity);
    run_folder2md(config).await?;
    Ok(())
}
