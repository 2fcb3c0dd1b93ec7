//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal frontend configuration.
///
/// Everything has a compiled default; environment variables override.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Path of the pipe-delimited catalog file.
    pub catalog_file: PathBuf,
    /// Path of the log file (the TUI owns stdout, so logs go to disk).
    pub log_file: PathBuf,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from("movies.txt"),
            log_file: PathBuf::from("reelshelf.log"),
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REELSHELF_FILE` - Catalog file path (default: movies.txt)
    /// - `REELSHELF_LOG` - Log file path (default: reelshelf.log)
    /// - `REELSHELF_PAGE_SIZE` - Movie list rows per page (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("REELSHELF_FILE") {
            config.catalog_file = PathBuf::from(path);
        }
        if let Ok(path) = env::var("REELSHELF_LOG") {
            config.log_file = PathBuf::from(path);
        }
        if let Some(rows) = read_env::<usize>("REELSHELF_PAGE_SIZE") {
            config.ui.page_size = rows.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Movie rows shown per page in the list browser.
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { page_size: 5 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
