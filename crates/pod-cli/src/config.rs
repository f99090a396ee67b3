//! Configuration file support for photo-or-drawing.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/photo-or-drawing/config.toml` (lowest priority)
//! - Project-local: `.photo-or-drawing.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Accepted values for `output.format`.
const OUTPUT_FORMATS: &[&str] = &["json", "jsonl", "text", "arff"];

/// Project-local config file name.
const PROJECT_CONFIG: &str = ".photo-or-drawing.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Classifier model settings.
    pub model: ModelConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Model configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model parameter file.
    pub path: Option<PathBuf>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json", "jsonl", "text" or "arff".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/photo-or-drawing/config.toml`
    /// 2. Project-local: `.photo-or-drawing.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
            config.output.format = None;
        }

        config
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref f) = self.output.format {
            if !OUTPUT_FORMATS.contains(&f.as_str()) {
                return Err(format!(
                    "output.format must be one of {}, got '{f}'",
                    OUTPUT_FORMATS.join(", ")
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        self.model.path = other.model.path.or_else(|| self.model.path.take());

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photo-or-drawing").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.photo-or-drawing.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG))
        .find(|path| path.exists())
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.general.recursive.is_none());
        assert!(config.model.path.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.output.pretty.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
recursive = true

[model]
path = '/opt/models/pod.toml'

[output]
format = 'arff'
pretty = true
progress = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(
            config.model.path,
            Some(PathBuf::from("/opt/models/pod.toml"))
        );
        assert_eq!(config.output.format, Some("arff".to_string()));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.output.progress, Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_configs() {
        let mut base: AppConfig = toml::from_str(
            r"
[model]
path = 'base.toml'

[output]
format = 'json'
pretty = true
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[general]
recursive = true

[output]
format = 'text'
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.general.recursive, Some(true));
        assert_eq!(base.model.path, Some(PathBuf::from("base.toml")));
        assert_eq!(base.output.format, Some("text".to_string()));
        // Untouched by the override
        assert_eq!(base.output.pretty, Some(true));
    }

    #[test]
    fn test_merge_override_replaces_model_path() {
        let mut base: AppConfig = toml::from_str("[model]\npath = 'a.toml'").unwrap();
        let other: AppConfig = toml::from_str("[model]\npath = 'b.toml'").unwrap();

        base.merge(other);

        assert_eq!(base.model.path, Some(PathBuf::from("b.toml")));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str("[output]\nprogress = true").unwrap();

        base.merge(AppConfig::default());

        assert_eq!(base.output.progress, Some(true));
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = r"
[output
format = 'json'
";
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_invalid_field_type_handled() {
        let toml = r#"
[general]
recursive = "yes"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "type mismatch should return error");
    }

    #[test]
    fn test_unknown_section_ignored() {
        let toml = r"
[output]
format = 'jsonl'

[blur]
threshold = 0.5
";
        let config: AppConfig = toml::from_str(toml).expect("unknown sections are ignored");
        assert_eq!(config.output.format, Some("jsonl".to_string()));
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_accepts_every_format() {
        for format in OUTPUT_FORMATS {
            let mut config = AppConfig::default();
            config.output.format = Some((*format).to_string());
            assert!(config.validate().is_ok(), "{format}");
        }
    }

    #[test]
    fn test_find_config_in_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG), "").unwrap();

        let found = find_config_in_parents(&nested).unwrap();
        assert_eq!(found, dir.path().join(PROJECT_CONFIG));
    }

    #[test]
    fn test_load_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\n").unwrap();

        assert!(load_file(&path).is_none());
    }
}
