use crate::schema::{ColumnType, SemanticType};

/// How a schema-builder method contributes columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMethod {
    /// Adds fixed columns regardless of the call's arguments.
    Fixed(&'static [(&'static str, ColumnType)]),

    /// Adds one column named by the first quoted argument.
    Named(ColumnType),
}

const CARBON_OR_NULL: ColumnType = ColumnType::nullable(SemanticType::DateTime);

const ID: &[(&str, ColumnType)] = &[("id", ColumnType::new(SemanticType::Integer))];
const REMEMBER_TOKEN: &[(&str, ColumnType)] =
    &[("remember_token", ColumnType::nullable(SemanticType::String))];
const SOFT_DELETES: &[(&str, ColumnType)] = &[("deleted_at", CARBON_OR_NULL)];
const TIMESTAMPS: &[(&str, ColumnType)] =
    &[("created_at", CARBON_OR_NULL), ("updated_at", CARBON_OR_NULL)];

/// Looks up a `$table->method(...)` name.
///
/// Fixed-column helpers are checked before named column types. Returns
/// `None` for methods that do not define columns (indexes, foreign keys,
/// drops) or that are not recognized.
pub fn column_method(method: &str) -> Option<ColumnMethod> {
    fixed_columns(method)
        .map(ColumnMethod::Fixed)
        .or_else(|| named_column_type(method).map(ColumnMethod::Named))
}

fn fixed_columns(method: &str) -> Option<&'static [(&'static str, ColumnType)]> {
    Some(match method {
        "id" => ID,
        "rememberToken" => REMEMBER_TOKEN,
        "softDeletes" | "softDeletesTz" => SOFT_DELETES,
        "timestamps" => TIMESTAMPS,
        _ => return None,
    })
}

fn named_column_type(method: &str) -> Option<ColumnType> {
    let ty = match method {
        "bigIncrements" | "bigInteger" | "foreignId" | "increments" | "integer"
        | "mediumInteger" | "smallInteger" | "smallIncrements" | "tinyInteger"
        | "tinyIncrements" | "unsignedBigInteger" | "unsignedInteger"
        | "unsignedMediumInteger" | "unsignedSmallInteger" | "unsignedTinyInteger" | "year" => {
            SemanticType::Integer
        }
        "decimal" | "double" | "float" | "unsignedDecimal" => SemanticType::Float,
        "boolean" => SemanticType::Boolean,
        "char" | "longText" | "mediumText" | "string" | "text" => SemanticType::String,
        "binary" => SemanticType::Binary,
        "enum" => SemanticType::Enum,
        "uuid" => SemanticType::Uuid,
        "time" | "timeTz" => SemanticType::Time,
        "morphs" => SemanticType::Morph,
        "json" | "jsonb" => SemanticType::Array,
        "date" | "dateTime" | "dateTimeTz" | "timestamp" | "timestampTz" => SemanticType::DateTime,
        "nullableMorphs" => return Some(ColumnType::nullable(SemanticType::Morph)),
        "nullableTimestamps" => return Some(CARBON_OR_NULL),
        _ => return None,
    };

    Some(ColumnType::new(ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_helpers() {
        assert_eq!(column_method("id"), Some(ColumnMethod::Fixed(ID)));
        assert_eq!(
            column_method("softDeletesTz"),
            Some(ColumnMethod::Fixed(SOFT_DELETES))
        );

        let Some(ColumnMethod::Fixed(columns)) = column_method("timestamps") else {
            panic!("timestamps is a fixed helper");
        };
        let names: Vec<_> = columns.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["created_at", "updated_at"]);
    }

    #[test]
    fn named_columns() {
        assert_eq!(
            column_method("unsignedBigInteger"),
            Some(ColumnMethod::Named(ColumnType::new(SemanticType::Integer)))
        );
        assert_eq!(
            column_method("jsonb"),
            Some(ColumnMethod::Named(ColumnType::new(SemanticType::Array)))
        );
        assert_eq!(
            column_method("nullableMorphs"),
            Some(ColumnMethod::Named(ColumnType::nullable(SemanticType::Morph)))
        );
    }

    #[test]
    fn non_column_methods() {
        assert_eq!(column_method("foreign"), None);
        assert_eq!(column_method("index"), None);
        assert_eq!(column_method("dropColumn"), None);
        assert_eq!(column_method("Integer"), None);
    }
}
