//! Entry point for the docxTRACT command line.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::debug;

use docxtract::cli::BANNER;
use docxtract::{Cli, extract_docx};

/// Usage problems (no `-x`, missing input) end with status 0; only failures
/// during extraction are reported as errors.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("{BANNER}");

    let cli = Cli::parse();
    debug!("{:?}", cli);

    if !cli.xtract {
        Cli::command().print_help()?;
        return Ok(());
    }

    if !cli.filename.is_file() {
        println!("File: {} does not exist.", cli.filename.display());
        return Ok(());
    }

    extract_docx(&cli.filename, &cli.extract_options()).await?;

    Ok(())
}
