//! Renders `@property` docblocks and splices them into model sources.

mod write;
pub use write::{apply, write_model_file, Placement};

use crate::schema::Columns;
use std::fmt;

/// A rendered property docblock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Docblock(String);

impl Docblock {
    /// Renders one `@property` line per column, `id` first.
    pub fn render(columns: &Columns) -> Docblock {
        let mut text = String::from("/**\n");

        let id = columns.get_key_value("id");
        let rest = columns.iter().filter(|(name, _)| name.as_str() != "id");

        for (name, ty) in id.into_iter().chain(rest) {
            text.push_str(&format!(" * @property {ty} ${name}\n"));
        }

        text.push_str(" */");
        Docblock(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Docblock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
