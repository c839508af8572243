//! Static analysis of Laravel migration source files.

mod extract;
pub use extract::{extract_columns, extract_schema_body, parse_schema_body};

mod locate;
pub use locate::{locate, references_table};

mod method;
pub use method::{ColumnMethod, column_method};
