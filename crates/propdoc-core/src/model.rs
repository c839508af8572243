//! Resolves model names to PHP classes and their source files.

mod table_name;
pub use table_name::default_table_name;

use crate::{
    config::{Namespace, ProjectConfig},
    fs::{self, FileSystem},
    Error, Result,
};

use regex::Regex;
use std::path::PathBuf;

/// A resolved Eloquent model class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelClass {
    /// Fully-qualified class name, without a leading backslash
    pub name: String,

    /// File declaring the class
    pub path: PathBuf,
}

impl ModelClass {
    /// Class name without its namespace.
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('\\')
            .map_or(self.name.as_str(), |(_, simple)| simple)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('\\').map(|(namespace, _)| namespace)
    }

    /// Reads the backing table name from the model source.
    ///
    /// A string literal `$table` property wins; otherwise Eloquent's
    /// convention of the snake-cased plural class name applies.
    pub fn table_name(&self, fs: &dyn FileSystem) -> Result<String> {
        let source = fs.read_to_string(&self.path).map_err(|err| {
            Error::table_name_unresolvable(
                &self.name,
                format!("cannot read {}: {err}", self.path.display()),
            )
        })?;

        table_name::from_source(&source, self.simple_name())
            .map_err(|reason| Error::table_name_unresolvable(&self.name, reason))
    }
}

/// Looks up models by name inside a project.
pub struct ModelRegistry<'a> {
    config: &'a ProjectConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> ModelRegistry<'a> {
    pub fn new(config: &'a ProjectConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Lists model candidates: the `.php` file stems in the models directory.
    pub fn list(&self) -> Result<Vec<String>> {
        let files = fs::files_with_extension(self.fs, &self.config.models_path(), "php")?;

        let models: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_stem()?.to_str().map(String::from))
            .collect();

        if models.is_empty() {
            return Err(Error::no_models_found());
        }

        Ok(models)
    }

    /// Resolves a possibly unqualified model name.
    ///
    /// The name is tried as given, then under each configured namespace in
    /// order. The first candidate whose source file exists and declares the
    /// class wins.
    pub fn resolve(&self, name: &str) -> Result<ModelClass> {
        let trimmed = name.trim().trim_start_matches('\\');

        if trimmed.is_empty() {
            return Err(Error::model_not_found(name));
        }

        for candidate in self.candidates(trimmed) {
            let Some(path) = self.class_path(&candidate) else {
                continue;
            };

            let class = ModelClass {
                name: candidate,
                path,
            };

            if self.declares(&class) {
                tracing::debug!(class = %class.name, path = %class.path.display(), "resolved model");
                return Ok(class);
            }

            tracing::trace!(class = %class.name, "model candidate does not exist");
        }

        Err(Error::model_not_found(name))
    }

    fn candidates(&self, name: &str) -> Vec<String> {
        let mut candidates = vec![name.to_string()];

        for namespace in &self.config.namespaces {
            let prefix = namespace.prefix.trim_matches('\\');
            let candidate = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}\\{name}")
            };

            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        candidates
    }

    /// Maps a class to its PSR-4 file path using the longest matching
    /// namespace prefix.
    fn class_path(&self, class: &str) -> Option<PathBuf> {
        let (namespace, rest) = self
            .config
            .namespaces
            .iter()
            .filter_map(|namespace| Some((namespace, strip_namespace(class, namespace)?)))
            .max_by_key(|(namespace, _)| namespace.prefix.trim_matches('\\').len())?;

        let relative = format!("{}.php", rest.replace('\\', "/"));
        Some(self.config.root.join(&namespace.path).join(relative))
    }

    /// Mirrors `class_exists`: the file is there, declares the class, and
    /// sits in the expected namespace.
    fn declares(&self, class: &ModelClass) -> bool {
        if !self.fs.is_file(&class.path) {
            return false;
        }

        let Ok(source) = self.fs.read_to_string(&class.path) else {
            return false;
        };

        let declaration = format!(r"\bclass\s+{}\b", regex::escape(class.simple_name()));
        let Ok(declaration) = Regex::new(&declaration) else {
            return false;
        };

        if !declaration.is_match(&source) {
            return false;
        }

        declared_namespace(&source) == class.namespace()
    }
}

fn strip_namespace<'a>(class: &'a str, namespace: &Namespace) -> Option<&'a str> {
    let prefix = namespace.prefix.trim_matches('\\');

    if prefix.is_empty() {
        return Some(class);
    }

    class.strip_prefix(prefix)?.strip_prefix('\\')
}

fn declared_namespace(source: &str) -> Option<&str> {
    static NAMESPACE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"(?m)^\s*namespace\s+([\w\\]+)\s*;").unwrap()
    });

    NAMESPACE
        .captures(source)
        .and_then(|captures| captures.get(1))
        .map(|namespace| namespace.as_str().trim_start_matches('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemFileSystem;

    #[test]
    fn simple_name_and_namespace() {
        let class = ModelClass {
            name: "App\\Models\\Billing\\Invoice".to_string(),
            path: PathBuf::from("app/Models/Billing/Invoice.php"),
        };

        assert_eq!(class.simple_name(), "Invoice");
        assert_eq!(class.namespace(), Some("App\\Models\\Billing"));
    }

    #[test]
    fn candidates_skip_duplicates() {
        let config = ProjectConfig::new();
        let fs = MemFileSystem::new();
        let registry = ModelRegistry::new(&config, &fs);

        assert_eq!(
            registry.candidates("Post"),
            vec!["Post", "App\\Models\\Post", "App\\Post"]
        );
    }

    #[test]
    fn class_path_prefers_longest_prefix() {
        let config = ProjectConfig::new().root("/srv/app");
        let fs = MemFileSystem::new();
        let registry = ModelRegistry::new(&config, &fs);

        assert_eq!(
            registry.class_path("App\\Models\\Billing\\Invoice"),
            Some(PathBuf::from("/srv/app/app/Models/Billing/Invoice.php"))
        );
        assert_eq!(
            registry.class_path("App\\User"),
            Some(PathBuf::from("/srv/app/app/User.php"))
        );
        assert_eq!(registry.class_path("Post"), None);
    }

    #[test]
    fn namespace_declaration_is_read() {
        assert_eq!(
            declared_namespace("<?php\n\nnamespace App\\Models;\n\nclass Post {}"),
            Some("App\\Models")
        );
        assert_eq!(declared_namespace("<?php class Post {}"), None);
    }
}
