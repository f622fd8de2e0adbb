// ABOUTME: File-based tracing setup — the terminal belongs to the TUI, so logs go to disk.
// ABOUTME: RUST_LOG controls the filter; defaults to info.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber writing to `<dir>/plainchat.log`.
///
/// The log file is truncated on each start; nothing about a session is meant
/// to survive a restart.
pub fn init(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = File::create(dir.join("plainchat.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
