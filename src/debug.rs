// Debug logging for Pong
// The terminal UI owns stdout, so tracing output goes to a file when enabled in the config

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

use crate::config::DebugConfig;

/// Install the file-backed tracing subscriber
///
/// # Behavior
/// - If disabled: returns immediately, no file created, tracing macros are no-ops
/// - If enabled: truncates the log file, writes a session header and routes all events there
pub fn init(config: &DebugConfig) -> io::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)?;

    writeln!(file, "=== Pong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", config.log_path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();

    Ok(())
}
