use anyhow::Result;
use modalist::config::Config;
use modalist::logger::{self, Logger};
use modalist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let buffer = Logger::new();
    if let Some(path) = logger::init(&config.logging, &buffer)? {
        eprintln!("Logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config, buffer).await?;

    Ok(())
}
