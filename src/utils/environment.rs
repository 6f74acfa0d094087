use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the Claude Code data directory under the home directory
pub const CLAUDE_DIR_NAME: &str = ".claude";

/// Name of the default static output directory under the home directory
pub const OUTPUT_DIR_NAME: &str = "claude-chat-history";

/// Get the current user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// The Claude directory under `home` (`~/.claude`)
pub fn claude_dir_in(home: &Path) -> PathBuf {
    home.join(CLAUDE_DIR_NAME)
}

/// The default output directory for generated pages under `home` (`~/claude-chat-history`)
pub fn output_dir_in(home: &Path) -> PathBuf {
    home.join(OUTPUT_DIR_NAME)
}
