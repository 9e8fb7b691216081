//! Configuration file support for snapcheck.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/snapcheck/config.toml` (lowest priority)
//! - Project-local: `.snapcheck.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Quality heuristic settings.
    pub quality: QualityConfig,
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

/// Quality heuristic configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Low-light brightness threshold (0.0-255.0).
    pub low_light_threshold: Option<f64>,
    /// Blurry-image dispersion threshold (non-negative).
    pub dispersion_threshold: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text", "jsonl", "json", or "html".
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
    /// 1. XDG config: `~/.config/snapcheck/config.toml`
    /// 2. Project-local: `.snapcheck.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
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
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.quality.low_light_threshold {
            if !(0.0..=255.0).contains(&t) {
                return Err(format!(
                    "quality.low_light_threshold must be 0.0-255.0, got {t}"
                ));
            }
        }
        if let Some(t) = self.quality.dispersion_threshold {
            if t < 0.0 {
                return Err(format!(
                    "quality.dispersion_threshold must be non-negative, got {t}"
                ));
            }
        }

        if let Some(ref f) = self.output.format {
            if !matches!(f.as_str(), "text" | "jsonl" | "json" | "html") {
                return Err(format!(
                    "output.format must be 'text', 'jsonl', 'json', or 'html', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        self.quality.low_light_threshold = other
            .quality
            .low_light_threshold
            .or(self.quality.low_light_threshold);
        self.quality.dispersion_threshold = other
            .quality
            .dispersion_threshold
            .or(self.quality.dispersion_threshold);

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("snapcheck").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.snapcheck.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".snapcheck.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
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
        assert!(config.quality.low_light_threshold.is_none());
        assert!(config.quality.dispersion_threshold.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: AppConfig = toml::from_str(toml).expect("parse empty config");
        assert!(config.general.recursive.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
recursive = true

[quality]
low_light_threshold = 60.0
dispersion_threshold = 15.0

[output]
format = 'json'
pretty = true
progress = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(config.quality.low_light_threshold, Some(60.0));
        assert_eq!(config.quality.dispersion_threshold, Some(15.0));
        assert_eq!(config.output.format, Some("json".to_string()));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.output.progress, Some(false));
    }

    #[test]
    fn test_merge_configs() {
        let mut base: AppConfig = toml::from_str(
            r"
[quality]
low_light_threshold = 40.0
dispersion_threshold = 5.0
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[quality]
low_light_threshold = 70.0

[output]
format = 'jsonl'
",
        )
        .expect("parse override");

        base.merge(override_config);

        // Threshold overridden
        assert_eq!(base.quality.low_light_threshold, Some(70.0));
        // Untouched value preserved from base
        assert_eq!(base.quality.dispersion_threshold, Some(5.0));
        // Output added from override
        assert_eq!(base.output.format, Some("jsonl".to_string()));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            r"
[quality]
dispersion_threshold = 20.0
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());

        assert_eq!(base.quality.dispersion_threshold, Some(20.0));
    }

    #[test]
    fn test_partial_quality_config() {
        let toml = r"
[quality]
low_light_threshold = 35.0
";
        let config: AppConfig = toml::from_str(toml).expect("parse partial quality");

        assert_eq!(config.quality.low_light_threshold, Some(35.0));
        assert!(config.quality.dispersion_threshold.is_none());
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = r"
[quality
low_light_threshold = 35.0
"; // Missing closing bracket
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_invalid_field_type_handled() {
        let toml = r#"
[quality]
low_light_threshold = "dim"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "type mismatch should return error");
    }

    #[test]
    fn test_validate_low_light_out_of_range() {
        let mut config = AppConfig::default();
        config.quality.low_light_threshold = Some(300.0);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("quality.low_light_threshold"));
    }

    #[test]
    fn test_validate_negative_dispersion() {
        let mut config = AppConfig::default();
        config.quality.dispersion_threshold = Some(-1.0);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("quality.dispersion_threshold"));
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_empty_config_passes() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_find_config_in_parents() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".snapcheck.toml"), "").unwrap();

        let found = find_config_in_parents(&nested).expect("should find config upward");
        assert!(found.ends_with(".snapcheck.toml"));
    }
}
