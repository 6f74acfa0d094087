//! Resolved runtime configuration
//!
//! Defaults come from the user's home directory; command-line flags override
//! individual fields before [`Config::validate`] is called.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::utils::environment::{claude_dir_in, home_dir, output_dir_in};

/// Port of the live server when none is given
pub const DEFAULT_PORT: u16 = 8787;

/// Number of sessions generated or listed when none is given
pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub claude_dir: PathBuf,
    pub output_dir: PathBuf,
    pub port: u16,
    pub limit: usize,
}

impl Config {
    /// Defaults rooted at the current user's home directory
    pub fn load() -> Result<Self> {
        Ok(Self::with_home(&home_dir()?))
    }

    /// Defaults rooted at `home`
    pub fn with_home(home: &Path) -> Self {
        Self {
            claude_dir: claude_dir_in(home),
            output_dir: output_dir_in(home),
            port: DEFAULT_PORT,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_claude_dir(mut self, claude_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = claude_dir {
            self.claude_dir = dir;
        }
        self
    }

    /// Checks that the Claude directory exists
    pub fn validate(&self) -> Result<()> {
        if !self.claude_dir.exists() {
            bail!("Claude Code directory not found: {}", self.claude_dir.display());
        }
        Ok(())
    }
}
