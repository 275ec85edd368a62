use anyhow::{Context, Result};
use pullfeed::config::Config;
use pullfeed::{logger, ui};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Handle --generate-config before anything touches the terminal
    if let Some(position) = args.iter().position(|arg| arg == "--generate-config") {
        let path = match args.get(position + 1).filter(|arg| !arg.starts_with("--")) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match args.iter().position(|arg| arg == "--config") {
        Some(position) => {
            let path = args.get(position + 1).context("--config requires a path")?;
            Config::load_from_file(path)?
        }
        None => Config::load()?,
    };

    let logs = logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config, logs).await?;

    Ok(())
}
