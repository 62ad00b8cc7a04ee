use crate::error::{AppError, Result};
use crate::format::HeaderStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = ".promcat.toml";
pub const GITIGNORE_FILENAME: &str = ".gitignore";
pub const PROMCATIGNORE_FILENAME: &str = ".promcatignore";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    #[serde(default = "default_true")]
    pub use_gitignore: bool,
    #[serde(default = "default_true")]
    pub use_promcatignore: bool,
    #[serde(default = "default_true")]
    pub use_default_ignores: bool,
    #[serde(default = "default_ignore_list")]
    pub default_ignores: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_true")]
    pub footer: bool,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    #[serde(default = "default_number_separator")]
    pub number_separator: String,
    #[serde(default = "default_true")]
    pub relative_paths: bool,
    #[serde(default = "default_true")]
    pub tree: bool,
}

fn default_true() -> bool {
    true
}
fn default_style() -> String {
    HeaderStyle::default().as_str().to_string()
}
fn default_number_separator() -> String {
    "|".to_string()
}
fn default_ignore_list() -> Vec<String> {
    vec![
        ".git".to_string(),
        "uv.lock".to_string(),
        "package-lock.json".to_string(),
    ]
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            use_gitignore: default_true(),
            use_promcatignore: default_true(),
            use_default_ignores: default_true(),
            default_ignores: default_ignore_list(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            footer: default_true(),
            line_numbers: default_true(),
            number_separator: default_number_separator(),
            relative_paths: default_true(),
            tree: default_true(),
        }
    }
}

impl Config {
    /// Resolves which config file to load, if any.
    ///
    /// An explicitly requested file must exist; the default `.promcat.toml`
    /// in the target directory is optional.
    pub fn resolve_config_path(
        root: &Path,
        explicit: Option<&String>,
        disabled: bool,
    ) -> Result<Option<PathBuf>> {
        if disabled {
            log::debug!("Config file loading disabled");
            return Ok(None);
        }
        if let Some(explicit) = explicit {
            let path = PathBuf::from(explicit);
            let path = if path.is_absolute() {
                path
            } else {
                root.join(path)
            };
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "Requested config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        let default = root.join(DEFAULT_CONFIG_FILENAME);
        if default.is_file() {
            Ok(Some(default))
        } else {
            Ok(None)
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Config> {
        log::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| AppError::TomlParse(format!("{}: {}", path.display(), e)))
    }

    /// The ignore files consulted in the walk root, in layering order.
    pub fn ignore_file_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if self.ignore.use_gitignore {
            names.push(GITIGNORE_FILENAME.to_string());
        }
        if self.ignore.use_promcatignore {
            names.push(PROMCATIGNORE_FILENAME.to_string());
        }
        names
    }

    pub fn header_style(&self) -> Result<HeaderStyle> {
        self.output.style.parse()
    }
}
