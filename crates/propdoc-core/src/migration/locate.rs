use crate::{
    err,
    fs::{self, FileSystem},
    Error, Result,
};

use regex::Regex;
use std::path::{Path, PathBuf};

/// Returns the migrations in `dir` that create or alter `table`.
///
/// Files keep the order the file system lists them in. An empty result is
/// not an error here.
pub fn locate(fs: &dyn FileSystem, dir: &Path, table: &str) -> Result<Vec<PathBuf>> {
    let pattern = table_pattern(table);
    let mut matching = vec![];

    for file in fs::files_with_extension(fs, dir, "php")? {
        let source = fs
            .read_lossy(&file)
            .map_err(|e| Error::from(e).context(err!("failed to read {}", file.display())))?;

        if pattern.is_match(&source) {
            tracing::debug!(migration = %file.display(), table, "found migration");
            matching.push(file);
        }
    }

    Ok(matching)
}

/// Whether `source` contains `Schema::create` or `Schema::table` for `table`.
pub fn references_table(source: &str, table: &str) -> bool {
    table_pattern(table).is_match(source)
}

fn table_pattern(table: &str) -> Regex {
    let pattern = format!(
        r#"Schema::(?:create|table)\(['"]{}['"]"#,
        regex::escape(table)
    );

    // The table name is escaped, so the pattern is always valid.
    Regex::new(&pattern).unwrap()
}
