//! Configuration file support for mdsplit
//!
//! Config files are loaded in order (later overrides earlier):
//! 1. `~/.config/mdsplit/config.toml` (user defaults)
//! 2. `.mdsplit.toml` in the current directory (local overrides)
//!
//! CLI flags override all config file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the local config, looked up in the working directory.
pub const LOCAL_CONFIG: &str = ".mdsplit.toml";

/// Configuration options loaded from config files
///
/// # Example
///
/// ```toml
/// # ~/.config/mdsplit/config.toml or .mdsplit.toml
/// output_dir = "split_md"   # Where section files go
/// quiet = false             # Suppress per-file output
/// verbose = false           # Enable debug logging
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output directory (overridden by -o)
    pub output_dir: Option<PathBuf>,
    /// Enable quiet mode by default
    pub quiet: Option<bool>,
    /// Enable verbose mode by default
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from user and local config files
    pub fn load(local_dir: &Path) -> Self {
        let user_config = dirs::config_dir()
            .map(|d| d.join("mdsplit/config.toml"))
            .and_then(|p| Self::load_file(&p))
            .unwrap_or_default();

        let local_config = Self::load_file(&local_dir.join(LOCAL_CONFIG)).unwrap_or_default();

        // Local overrides user
        let merged = user_config.override_with(local_config);
        tracing::debug!(
            output_dir = ?merged.output_dir,
            quiet = ?merged.quiet,
            verbose = ?merged.verbose,
            "Effective config after merge"
        );
        merged
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return None;
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Layer another config on top (other overrides self where present)
    fn override_with(self, other: Self) -> Self {
        Config {
            output_dir: other.output_dir.or(self.output_dir),
            quiet: other.quiet.or(self.quiet),
            verbose: other.verbose.or(self.verbose),
        }
    }

    /// Directory name used next to the source when nothing else is configured
    pub const DEFAULT_OUTPUT_DIR: &'static str = "split_md";

    /// Output directory for `source`, with default fallback
    pub fn output_dir_for(&self, source: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => source
                .parent()
                .map(|p| p.join(Self::DEFAULT_OUTPUT_DIR))
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT_DIR)),
        }
    }

    /// Get quiet mode with default fallback (false)
    pub fn quiet_or_default(&self) -> bool {
        self.quiet.unwrap_or(false)
    }

    /// Get verbose mode with default fallback (false)
    pub fn verbose_or_default(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"sections\"\nquiet = true").unwrap();

        let config = Config::load_file(file.path()).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("sections")));
        assert_eq!(config.quiet, Some(true));
        assert_eq!(config.verbose, None);
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load_file(Path::new("/nonexistent/config.toml"));
        assert!(config.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = [not valid").unwrap();
        assert!(Config::load_file(file.path()).is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "verbose = true\ninput_dir = \"in\"").unwrap();
        let config = Config::load_file(file.path()).unwrap();
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_merge_override() {
        let user = Config {
            output_dir: Some(PathBuf::from("user_out")),
            quiet: Some(true),
            verbose: None,
        };
        let local = Config {
            output_dir: Some(PathBuf::from("local_out")),
            quiet: None,
            verbose: Some(true),
        };
        let merged = user.override_with(local);
        assert_eq!(merged.output_dir, Some(PathBuf::from("local_out")));
        assert_eq!(merged.quiet, Some(true));
        assert_eq!(merged.verbose, Some(true));
    }

    #[test]
    fn test_load_local_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LOCAL_CONFIG), "output_dir = \"here\"\n").unwrap();
        let config = Config::load(dir.path());
        assert_eq!(config.output_dir, Some(PathBuf::from("here")));
    }

    #[test]
    fn test_output_dir_default_next_to_source() {
        let config = Config::default();
        assert_eq!(
            config.output_dir_for(Path::new("docs/manual.md")),
            PathBuf::from("docs/split_md")
        );
    }

    #[test]
    fn test_output_dir_configured() {
        let config = Config {
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(config.output_dir_for(Path::new("manual.md")), PathBuf::from("out"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.quiet_or_default());
        assert!(!config.verbose_or_default());
    }
}
