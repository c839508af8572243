//! Column types inferred from migration source.

use indexmap::IndexMap;
use std::fmt;

/// Ordered column name → type mapping.
///
/// Redefining a column replaces its type but keeps its original position.
pub type Columns = IndexMap<String, ColumnType>;

/// Semantic category of a column, as implied by its schema-builder method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Integer,
    Float,
    Boolean,
    String,
    Binary,
    /// JSON columns, cast to arrays
    Array,
    /// Dates and timestamps, cast to Carbon instances
    DateTime,
    /// Time of day, kept as a string
    Time,
    Uuid,
    Enum,
    /// Polymorphic relation column
    Morph,
}

impl SemanticType {
    /// The PHP type used in `@property` annotations.
    pub fn php_type(self) -> &'static str {
        match self {
            SemanticType::Integer => "int",
            SemanticType::Float => "float",
            SemanticType::Boolean => "bool",
            SemanticType::Array => "array",
            SemanticType::DateTime => "\\Illuminate\\Support\\Carbon",
            SemanticType::String
            | SemanticType::Binary
            | SemanticType::Time
            | SemanticType::Uuid
            | SemanticType::Enum
            | SemanticType::Morph => "string",
        }
    }
}

/// Inferred type of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnType {
    pub ty: SemanticType,
    pub nullable: bool,
}

impl ColumnType {
    pub const fn new(ty: SemanticType) -> Self {
        Self {
            ty,
            nullable: false,
        }
    }

    pub const fn nullable(ty: SemanticType) -> Self {
        Self { ty, nullable: true }
    }

    /// Returns a copy that also accepts null.
    pub const fn or_null(self) -> Self {
        Self::nullable(self.ty)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.php_type())?;
        if self.nullable {
            f.write_str("|null")?;
        }
        Ok(())
    }
}
