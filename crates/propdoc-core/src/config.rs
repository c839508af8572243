use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Layout of the Laravel project a run operates on.
///
/// All directories are relative to [`ProjectConfig::root`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root. Set by the caller, never read from a config file.
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory holding the model classes
    pub models_dir: PathBuf,

    /// Directory holding the migration files
    pub migrations_dir: PathBuf,

    /// Namespace prefixes tried, in order, when resolving an unqualified
    /// model name. Each maps to the directory holding its classes.
    pub namespaces: Vec<Namespace>,
}

/// A PSR-4 namespace prefix and the directory its classes live in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Namespace {
    pub prefix: String,
    pub path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            models_dir: PathBuf::from("app/Models"),
            migrations_dir: PathBuf::from("database/migrations"),
            namespaces: vec![
                Namespace::new("App\\Models", "app/Models"),
                Namespace::new("App", "app"),
            ],
        }
    }
}

impl ProjectConfig {
    /// Create a new ProjectConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the models directory
    pub fn models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Set the migrations directory
    pub fn migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Replace the namespace search list
    pub fn namespaces(mut self, namespaces: Vec<Namespace>) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn models_path(&self) -> PathBuf {
        self.root.join(&self.models_dir)
    }

    pub fn migrations_path(&self) -> PathBuf {
        self.root.join(&self.migrations_dir)
    }

    /// Strips the project root from `path`, leaving it unchanged when it lies
    /// outside the project.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into().trim_matches('\\').to_string(),
            path: path.into(),
        }
    }
}
