use crate::{
    config::ProjectConfig,
    docblock::{self, Docblock, Placement},
    format::{FormatStatus, Formatter},
    fs::FileSystem,
    migration,
    model::{ModelClass, ModelRegistry},
    schema::Columns,
    Error, Result,
};

use std::path::PathBuf;

/// Picks one model when none was named on the command line.
pub trait Chooser {
    /// Returns one of `candidates`.
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<String>;
}

/// Runs the resolve → locate → extract → write pipeline for one model.
///
/// Each stage is exposed on its own so callers can report progress between
/// them; [`Synthesizer::run`] chains them all.
pub struct Synthesizer<'a> {
    config: &'a ProjectConfig,
    fs: &'a dyn FileSystem,
    formatter: Option<&'a dyn Formatter>,
    dry_run: bool,
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub model: ModelClass,
    pub table: String,
    pub migrations: Vec<PathBuf>,
    pub columns: Columns,
    pub docblock: Docblock,

    /// `None` on a dry run
    pub placement: Option<Placement>,

    pub format: FormatStatus,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a ProjectConfig, fs: &'a dyn FileSystem) -> Self {
        Self {
            config,
            fs,
            formatter: None,
            dry_run: false,
        }
    }

    /// Set the formatter run after the model file is written
    pub fn formatter(mut self, formatter: &'a dyn Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Render the docblock without touching the model file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn registry(&self) -> ModelRegistry<'a> {
        ModelRegistry::new(self.config, self.fs)
    }

    /// Resolves `name`, or asks `chooser` to pick among the listed models.
    pub fn select_model(&self, name: Option<&str>, chooser: &dyn Chooser) -> Result<ModelClass> {
        let registry = self.registry();

        let name = match name {
            Some(name) => name.to_string(),
            None => {
                let models = registry.list()?;
                let chosen = chooser.choose("Select a model", &models)?;

                if !models.contains(&chosen) {
                    return Err(Error::model_not_found(chosen));
                }

                chosen
            }
        };

        registry.resolve(&name)
    }

    pub fn table_name(&self, model: &ModelClass) -> Result<String> {
        model.table_name(self.fs)
    }

    /// Migrations for `table`; fails when there are none.
    pub fn migrations(&self, table: &str) -> Result<Vec<PathBuf>> {
        let migrations = migration::locate(self.fs, &self.config.migrations_path(), table)?;

        if migrations.is_empty() {
            return Err(Error::no_migrations_found(table));
        }

        Ok(migrations)
    }

    /// Columns defined by `migrations`; fails when there are none.
    pub fn columns(&self, migrations: &[PathBuf]) -> Result<Columns> {
        let columns = migration::extract_columns(self.fs, migrations)?;

        if columns.is_empty() {
            return Err(Error::no_columns_found());
        }

        Ok(columns)
    }

    /// Writes `docblock` into the model file. Returns `None` on a dry run.
    pub fn write(&self, model: &ModelClass, docblock: &Docblock) -> Result<Option<Placement>> {
        if self.dry_run {
            return Ok(None);
        }

        docblock::write_model_file(self.fs, model, docblock).map(Some)
    }

    /// Runs the formatter over the model file. Never fails: problems are
    /// reported as [`FormatStatus::Failed`].
    pub fn format(&self, model: &ModelClass) -> FormatStatus {
        let Some(formatter) = self.formatter.filter(|_| !self.dry_run) else {
            return FormatStatus::Skipped;
        };

        let status = formatter
            .format(&model.path)
            .unwrap_or_else(|err| FormatStatus::Failed {
                code: None,
                output: err.to_string(),
            });

        if let FormatStatus::Failed { code, .. } = &status {
            tracing::warn!(path = %model.path.display(), ?code, "formatter failed");
        }

        status
    }

    pub fn run(&self, name: Option<&str>, chooser: &dyn Chooser) -> Result<Outcome> {
        let model = self.select_model(name, chooser)?;
        let table = self.table_name(&model)?;
        let migrations = self.migrations(&table)?;
        let columns = self.columns(&migrations)?;
        let docblock = Docblock::render(&columns);
        let placement = self.write(&model, &docblock)?;
        let format = self.format(&model);

        Ok(Outcome {
            model,
            table,
            migrations,
            columns,
            docblock,
            placement,
            format,
        })
    }
}
