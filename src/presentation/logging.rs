//! Log subscriber setup for the binary
//!
//! Lines go to stderr as `2024/01/20 03:00:01  INFO message`. The level is
//! chosen by `--verbose` only; `RUST_LOG` is not consulted.

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Timestamp layout of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Maximum level shown for the given verbosity
pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let stderr = std::io::stderr();
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
