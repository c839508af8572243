use anyhow::{Context, Result};
use propdoc_core::ProjectConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Name of the config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "propdoc.toml";

/// Configuration for propdoc CLI operations
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Project layout
    pub project: ProjectConfig,

    /// Formatter run over rewritten model files
    pub formatter: FormatterConfig,
}

/// Configuration for the code formatter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Run the formatter after writing a model
    pub enabled: bool,

    /// Program and leading arguments. The model path and `--config=<file>`
    /// are appended.
    pub command: Vec<String>,

    /// Formatter rules file, relative to the project root
    pub config: PathBuf,

    /// Seconds before the formatter is killed
    pub timeout_secs: u64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: vec!["vendor/bin/pint".to_string()],
            config: PathBuf::from("pint.json"),
            timeout_secs: 60,
        }
    }
}

impl FormatterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project configuration
    pub fn project(mut self, project: ProjectConfig) -> Self {
        self.project = project;
        self
    }

    /// Set the formatter configuration
    pub fn formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Loads `explicit` if given, else `<root>/propdoc.toml` when it exists,
    /// else the defaults. The project root is always `root`.
    pub fn discover(root: impl AsRef<Path>, explicit: Option<&Path>) -> Result<Self> {
        let root = root.as_ref();

        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if std::fs::exists(&default_path)? {
                    Self::load(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.project.root = root.to_path_buf();
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use propdoc_core::config::Namespace;

    #[test]
    fn empty_file_is_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_all_sections() {
        let config: Config = r#"
            [project]
            models_dir = "src/Models"
            migrations_dir = "db/migrations"

            [[project.namespaces]]
            prefix = "Acme\\Models"
            path = "src/Models"

            [formatter]
            command = ["php", "vendor/bin/pint"]
            config = "tools/pint.json"
            timeout_secs = 5
        "#
        .parse()
        .unwrap();

        assert_eq!(config.project.models_dir, PathBuf::from("src/Models"));
        assert_eq!(config.project.migrations_dir, PathBuf::from("db/migrations"));
        assert_eq!(
            config.project.namespaces,
            vec![Namespace::new("Acme\\Models", "src/Models")]
        );
        assert!(config.formatter.enabled);
        assert_eq!(config.formatter.command, ["php", "vendor/bin/pint"]);
        assert_eq!(config.formatter.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!("[project]\nmodel_dir = \"x\"".parse::<Config>().is_err());
    }

    #[test]
    fn discover_reads_root_config() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[formatter]\nenabled = false\n",
        )
        .unwrap();

        let config = Config::discover(root.path(), None).unwrap();

        assert!(!config.formatter.enabled);
        assert_eq!(config.project.root, root.path());
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::discover(root.path(), None).unwrap();

        assert_eq!(config.formatter, FormatterConfig::default());
        assert_eq!(config.project.models_path(), root.path().join("app/Models"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("missing.toml");

        let err = Config::discover(root.path(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("missing.toml"), "{err}");
    }
}
