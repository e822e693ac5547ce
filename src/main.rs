mod app;
mod atcoder;
mod config;
mod scaffold;
mod ui;

use anyhow::{Context, Result};

use app::App;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    if !Config::config_path().exists() {
        // first run: persist the defaults so they are editable
        config.save()?;
    }
    init_logger()?;

    let mut terminal = ratatui::init();
    let mut app = App::new(config)?;

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    // Print the last run's outcome so it survives the TUI teardown
    if let Some(summary) = &app.last_summary {
        println!("{summary}");
    }

    result
}

/// File-backed logging; stdout belongs to the TUI.
fn init_logger() -> Result<()> {
    let log_dir = Config::config_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let log_path = log_dir.join("atcgen.log");

    fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} {} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                message
            ))
        })
        .chain(fern::log_file(&log_path).with_context(|| {
            format!("Failed to open log file {}", log_path.display())
        })?)
        .apply()
        .context("Failed to initialize logger")?;
    Ok(())
}
