use super::Docblock;
use crate::{fs::FileSystem, model::ModelClass, Error, Result};

use regex::Regex;
use std::sync::LazyLock;

/// A property docblock as written by this tool, current or legacy shape.
static GENERATED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)/\*\*\s*\n",
        r"(\s*\*\s*Properties generated from database schema\s*\n)?",
        r"\s*\*\s*@property.*?\*/",
    ))
    .unwrap()
});

/// Where the docblock ended up in the model source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// An existing property docblock was replaced
    Replaced,

    /// The docblock was inserted above the class declaration
    Inserted,
}

/// Splices `docblock` into a model source.
///
/// The first generated docblock is replaced when present. Otherwise the
/// block goes right before the declaration of `class_name`, ahead of any
/// class modifiers. Returns `None` when neither location exists. Nothing
/// else in the source changes.
pub fn apply(source: &str, class_name: &str, docblock: &Docblock) -> Option<(String, Placement)> {
    if let Some(existing) = GENERATED_BLOCK.find(source) {
        let mut updated = String::with_capacity(source.len() + docblock.as_str().len());
        updated.push_str(&source[..existing.start()]);
        updated.push_str(docblock.as_str());
        updated.push_str(&source[existing.end()..]);
        return Some((updated, Placement::Replaced));
    }

    let declaration = Regex::new(&format!(
        r"(?:\b(?:final|abstract|readonly)\s+)*\bclass\s+{}\b",
        regex::escape(class_name)
    ))
    .ok()?;

    let position = declaration.find(source)?.start();

    let mut updated = String::with_capacity(source.len() + docblock.as_str().len() + 1);
    updated.push_str(&source[..position]);
    updated.push_str(docblock.as_str());
    updated.push('\n');
    updated.push_str(&source[position..]);
    Some((updated, Placement::Inserted))
}

/// Rewrites the model's source file with `docblock`.
pub fn write_model_file(
    fs: &dyn FileSystem,
    class: &ModelClass,
    docblock: &Docblock,
) -> Result<Placement> {
    if !fs.is_file(&class.path) {
        return Err(Error::model_file_not_found(&class.name, &class.path));
    }

    let source = fs
        .read_to_string(&class.path)
        .map_err(|err| Error::model_file_unreadable(&class.path, err))?;

    let Some((updated, placement)) = apply(&source, class.simple_name(), docblock) else {
        return Err(Error::docblock_replace_failed(&class.name));
    };

    fs.write(&class.path, &updated).map_err(|err| {
        Error::from(err).context(crate::err!("failed to write {}", class.path.display()))
    })?;

    tracing::debug!(path = %class.path.display(), ?placement, "wrote model docblock");

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block() -> Docblock {
        Docblock(String::from("/**\n * @property int $id\n */"))
    }

    #[test]
    fn inserts_before_final_modifier() {
        let source = "<?php\n\nnamespace App\\Models;\n\nfinal class Post extends Model\n{\n}\n";
        let (updated, placement) = apply(source, "Post", &block()).unwrap();

        assert_eq!(placement, Placement::Inserted);
        assert_eq!(
            updated,
            "<?php\n\nnamespace App\\Models;\n\n/**\n * @property int $id\n */\nfinal class Post extends Model\n{\n}\n"
        );
    }

    #[test]
    fn does_not_match_longer_class_names() {
        let source = "<?php\n\nclass PostTag {}\n";
        assert_eq!(apply(source, "Post", &block()), None);
    }

    #[test]
    fn replaces_legacy_block() {
        let source = "<?php\n\n/**\n * Properties generated from database schema\n * @property string $name\n */\nclass Tag {}\n";
        let (updated, placement) = apply(source, "Tag", &block()).unwrap();

        assert_eq!(placement, Placement::Replaced);
        assert_eq!(
            updated,
            "<?php\n\n/**\n * @property int $id\n */\nclass Tag {}\n"
        );
    }

    #[test]
    fn leaves_other_docblocks_alone() {
        let source = "<?php\n\n/**\n * Blog posts.\n */\nclass Post {}\n";
        let (updated, placement) = apply(source, "Post", &block()).unwrap();

        assert_eq!(placement, Placement::Inserted);
        assert!(updated.starts_with("<?php\n\n/**\n * Blog posts.\n */\n/**\n * @property int $id\n */\nclass Post {}"));
    }
}
