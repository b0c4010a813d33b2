use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Something that can hand a URL to the OS.
pub trait Launcher {
    fn open(&self, url: &str) -> Result<()>;
}

/// Spawns an opener program (`open` on macOS) and waits for it.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    program: PathBuf,
}

impl SystemLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<()> {
        tracing::debug!(program = %self.program.display(), "spawning opener");

        let status = Command::new(&self.program)
            .arg(url)
            .status()
            .map_err(|e| Error::Launch(format!("{}: {e}", self.program.display())))?;

        if !status.success() {
            return Err(Error::Launch(format!(
                "{} exited with {status}",
                self.program.display()
            )));
        }
        Ok(())
    }
}
