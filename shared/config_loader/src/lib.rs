//! # Config Loader
//!
//! Locates and reads plain-text configuration files and splits them into
//! `key=value` pairs. Interpreting the values is left to the caller.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("depthscan.conf")?;
//!     let content = load_config_file(path)?;
//!     for entry in parse_key_values(&content)? {
//!         println!("{} = {}", entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points directly at a configuration file.
pub const CONFIG_ENV_VAR: &str = "DEPTHSCAN_CONFIG";

/// Directory name used under the per-user configuration directory.
const APP_DIR: &str = "depthscan";

/// One `key=value` line of a configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// 1-based line number in the source text.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Reads the whole file at `path`.
///
/// Does not parse or validate anything.
///
/// # Errors
///
/// [`ConfigError::FileNotFound`] if nothing exists at `path`,
/// [`ConfigError::ReadError`] if it cannot be read as UTF-8 text.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
}

/// Candidate locations for `filename`, in search order:
///
/// 1. the path in [`CONFIG_ENV_VAR`], if set
/// 2. `./config/{filename}`
/// 3. `./{filename}`
/// 4. `{user config dir}/depthscan/{filename}`
pub fn search_paths(filename: &str) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from("./config").join(filename));
    paths.push(PathBuf::from("./").join(filename));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR).join(filename));
    }

    paths
}

/// Returns the first of `candidates` that exists.
pub fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|path| path.is_file())
}

/// Finds `filename` in the locations listed by [`search_paths`].
///
/// # Errors
///
/// [`ConfigError::FileNotFound`] naming every searched location.
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    let candidates = search_paths(filename);
    let searched = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    first_existing(candidates).ok_or_else(|| {
        ConfigError::FileNotFound(format!("'{}' (searched: {})", filename, searched))
    })
}

/// Splits `content` into `key=value` entries.
///
/// Blank lines and lines starting with `#` are skipped. Keys and values are
/// trimmed; a value may itself contain `=`.
///
/// # Errors
///
/// [`ConfigError::Parse`] for a line without `=` or with an empty key.
pub fn parse_key_values(content: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed.split_once('=').ok_or_else(|| ConfigError::Parse {
            line,
            message: format!("expected key=value, got '{}'", trimmed),
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::Parse {
                line,
                message: "missing key before '='".to_string(),
            });
        }

        entries.push(Entry {
            line,
            key: key.to_string(),
            value: value.trim().to_string(),
        });
    }

    Ok(entries)
}
