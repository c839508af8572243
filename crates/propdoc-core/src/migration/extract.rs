use super::{column_method, ColumnMethod};
use crate::{err, fs::FileSystem, schema::Columns, Error, Result};

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// `Schema::create(...)` / `Schema::table(...)` with a `Blueprint $table`
/// closure. Group 2 is the closure body, up to the first `});`.
static SCHEMA_CLOSURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)Schema::(create|table)\([^,]+,\s*(?:static\s*)?",
        r"function\s*\(\s*Blueprint\s*\$table\s*\)\s*",
        r"(?:use\s*\([^)]*\))?\s*:?\s*(?:void)?\s*",
        r"\{(.+?)\}\s*\)\s*;",
    ))
    .unwrap()
});

/// A single-line `$table->method(args);` statement.
static COLUMN_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$table->(\w+)\((.*?)\);").unwrap());

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());

/// Builds the column mapping for a table from its migrations.
///
/// Files are read in the given order; a column defined again by a later file
/// takes the later type.
pub fn extract_columns(fs: &dyn FileSystem, migrations: &[PathBuf]) -> Result<Columns> {
    let mut columns = Columns::new();

    for migration in migrations {
        let source = fs
            .read_lossy(migration)
            .map_err(|e| Error::from(e).context(err!("failed to read {}", migration.display())))?;

        match extract_schema_body(&source) {
            Some(body) => parse_schema_body(body, &mut columns),
            None => {
                tracing::debug!(migration = %migration.display(), "no schema closure found");
            }
        }
    }

    Ok(columns)
}

/// Body of the first schema closure in a migration.
pub fn extract_schema_body(source: &str) -> Option<&str> {
    SCHEMA_CLOSURE
        .captures(source)
        .and_then(|captures| captures.get(2))
        .map(|body| body.as_str())
}

/// Adds the columns defined in a schema closure body to `columns`.
///
/// Statements whose method is unknown, or whose named column has no quoted
/// first argument, are skipped.
pub fn parse_schema_body(body: &str, columns: &mut Columns) {
    for call in COLUMN_CALL.captures_iter(body) {
        let statement = &call[0];
        let method = &call[1];
        let args = &call[2];

        match column_method(method) {
            Some(ColumnMethod::Fixed(fixed)) => {
                for (name, ty) in fixed {
                    columns.insert(name.to_string(), *ty);
                }
            }
            Some(ColumnMethod::Named(ty)) => {
                let Some(name) = QUOTED.captures(args).map(|quoted| quoted[1].to_string()) else {
                    tracing::trace!(statement, "column name is not a string literal");
                    continue;
                };

                let ty = if statement.contains("->nullable") {
                    ty.or_null()
                } else {
                    ty
                };

                columns.insert(name, ty);
            }
            None => {
                tracing::trace!(method, "skipping schema builder call");
            }
        }
    }
}
