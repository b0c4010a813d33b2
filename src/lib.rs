//! Small macOS bridges: open an Apple Music search and create calendar
//! events from the command line.

pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod music;

pub use config::Config;
pub use error::{Error, Result};

/// Command-line arguments after the program name. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub fn cli_args() -> Vec<String> {
    std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
