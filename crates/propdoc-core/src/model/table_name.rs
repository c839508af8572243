use heck::ToSnakeCase;
use regex::Regex;
use std::sync::LazyLock;

static TABLE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|protected|private|var)\s+(?:\??string\s+)?\$table\s*=\s*([^;]*);")
        .unwrap()
});

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:'([^'\\]*)'|"([^"\\$]*)")$"#).unwrap());

/// Eloquent's default table name: the class name, plural, in snake case.
///
/// Only the last word is pluralized, so `BlogPost` becomes `blog_posts`.
pub fn default_table_name(class: &str) -> String {
    let snake = class.to_snake_case();

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize(last)),
        None => pluralize(&snake),
    }
}

fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    pluralizer::pluralize(word, 2, false)
}

pub(super) fn from_source(source: &str, simple_name: &str) -> Result<String, String> {
    if let Some(captures) = TABLE_PROPERTY.captures(source) {
        let value = captures[1].trim();

        let literal = STRING_LITERAL
            .captures(value)
            .and_then(|literal| literal.get(1).or_else(|| literal.get(2)))
            .map(|literal| literal.as_str());

        return match literal {
            Some(table) if !table.is_empty() => Ok(table.to_string()),
            Some(_) => Err("$table is empty".to_string()),
            None => Err(format!("$table is not a string literal: {value}")),
        };
    }

    let table = default_table_name(simple_name);
    if table.is_empty() {
        return Err("class name is empty".to_string());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_follow_eloquent() {
        assert_eq!(default_table_name("Post"), "posts");
        assert_eq!(default_table_name("User"), "users");
        assert_eq!(default_table_name("BlogPost"), "blog_posts");
        assert_eq!(default_table_name("Category"), "categories");
        assert_eq!(default_table_name("Person"), "people");
    }

    #[test]
    fn literal_table_property_wins() {
        let source = "class Post extends Model\n{\n    protected $table = 'articles';\n}";
        assert_eq!(from_source(source, "Post").unwrap(), "articles");

        let source = "class Post extends Model\n{\n    protected string $table = \"articles\";\n}";
        assert_eq!(from_source(source, "Post").unwrap(), "articles");
    }

    #[test]
    fn computed_table_property_is_rejected() {
        let source = "class Post extends Model\n{\n    protected $table = self::TABLE;\n}";
        let err = from_source(source, "Post").unwrap_err();
        assert!(err.contains("self::TABLE"), "{err}");
    }
}
