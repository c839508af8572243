use propdoc_core::fs::MemFileSystem;
use propdoc_core::migration::{extract_columns, parse_schema_body};
use propdoc_core::schema::{ColumnType, Columns, SemanticType};

use std::path::PathBuf;

const CARBON_OR_NULL: &str = "\\Illuminate\\Support\\Carbon|null";

fn migration(table: &str, call: &str, body: &str) -> String {
    format!(
        "<?php\n\nuse Illuminate\\Database\\Migrations\\Migration;\nuse Illuminate\\Database\\Schema\\Blueprint;\nuse Illuminate\\Support\\Facades\\Schema;\n\nreturn new class extends Migration\n{{\n    public function up(): void\n    {{\n        Schema::{call}('{table}', function (Blueprint $table) {{\n{body}\n        }});\n    }}\n}};\n"
    )
}

fn rendered(columns: &Columns) -> Vec<(String, String)> {
    columns
        .iter()
        .map(|(name, ty)| (name.clone(), ty.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(name, ty)| (name.to_string(), ty.to_string()))
        .collect()
}

#[test]
fn post_scenario() {
    let fs = MemFileSystem::new().with_file(
        "database/migrations/2024_01_01_000000_create_posts_table.php",
        migration(
            "posts",
            "create",
            "            $table->id();\n            $table->string('title');\n            $table->text('body')->nullable();\n            $table->timestamps();",
        ),
    );

    let columns = extract_columns(
        &fs,
        &[PathBuf::from(
            "database/migrations/2024_01_01_000000_create_posts_table.php",
        )],
    )
    .unwrap();

    assert_eq!(
        rendered(&columns),
        pairs(&[
            ("id", "int"),
            ("title", "string"),
            ("body", "string|null"),
            ("created_at", CARBON_OR_NULL),
            ("updated_at", CARBON_OR_NULL),
        ])
    );
}

#[test]
fn timestamps_add_exactly_two_nullable_columns() {
    let mut columns = Columns::new();
    parse_schema_body("$table->timestamps();", &mut columns);

    assert_eq!(
        rendered(&columns),
        pairs(&[("created_at", CARBON_OR_NULL), ("updated_at", CARBON_OR_NULL)])
    );
}

#[test]
fn nullable_modifier_only_affects_its_statement() {
    let mut columns = Columns::new();
    parse_schema_body(
        "$table->integer('votes')->nullable();\n$table->integer('views');\n$table->json('meta')->nullable()->default(null);",
        &mut columns,
    );

    assert_eq!(columns["votes"].to_string(), "int|null");
    assert_eq!(columns["views"].to_string(), "int");
    assert_eq!(columns["meta"].to_string(), "array|null");
}

#[test]
fn fixed_helpers_ignore_arguments() {
    let mut columns = Columns::new();
    parse_schema_body(
        "$table->id('post_id');\n$table->softDeletes('removed_at', 0);\n$table->rememberToken();",
        &mut columns,
    );

    assert_eq!(
        rendered(&columns),
        pairs(&[
            ("id", "int"),
            ("deleted_at", CARBON_OR_NULL),
            ("remember_token", "string|null"),
        ])
    );
}

#[test]
fn unrecognized_methods_are_skipped() {
    let mut columns = Columns::new();
    parse_schema_body(
        "$table->foreign('user_id')->references('id')->on('users');\n$table->index('title');\n$table->geometry('area');\n$table->string('title');",
        &mut columns,
    );

    assert_eq!(rendered(&columns), pairs(&[("title", "string")]));
}

#[test]
fn every_mapped_method_has_a_type() {
    let cases = [
        ("bigIncrements", "int"),
        ("foreignId", "int"),
        ("year", "int"),
        ("unsignedDecimal", "float"),
        ("double", "float"),
        ("boolean", "bool"),
        ("char", "string"),
        ("longText", "string"),
        ("binary", "string"),
        ("enum", "string"),
        ("uuid", "string"),
        ("timeTz", "string"),
        ("morphs", "string"),
        ("nullableMorphs", "string|null"),
        ("jsonb", "array"),
        ("date", "\\Illuminate\\Support\\Carbon"),
        ("timestampTz", "\\Illuminate\\Support\\Carbon"),
        ("nullableTimestamps", CARBON_OR_NULL),
    ];

    for (method, expected) in cases {
        let mut columns = Columns::new();
        parse_schema_body(&format!("$table->{method}('column');"), &mut columns);

        assert_eq!(
            columns.get("column").map(ToString::to_string).as_deref(),
            Some(expected),
            "{method}"
        );
    }
}

#[test]
fn later_migration_wins() {
    let fs = MemFileSystem::new()
        .with_file(
            "migrations/2024_01_01_create_posts.php",
            migration(
                "posts",
                "create",
                "$table->id();\n$table->string('score');\n$table->string('title');",
            ),
        )
        .with_file(
            "migrations/2024_02_01_alter_posts.php",
            migration("posts", "table", "$table->float('score')->nullable()->change();"),
        );

    let columns = extract_columns(
        &fs,
        &[
            PathBuf::from("migrations/2024_01_01_create_posts.php"),
            PathBuf::from("migrations/2024_02_01_alter_posts.php"),
        ],
    )
    .unwrap();

    assert_eq!(
        columns["score"],
        ColumnType::nullable(SemanticType::Float)
    );
    // Redefinition keeps the original position
    assert_eq!(
        columns.keys().collect::<Vec<_>>(),
        ["id", "score", "title"]
    );
}

#[test]
fn only_the_first_closure_is_read() {
    let source = "<?php\nSchema::create('posts', function (Blueprint $table) {\n    $table->id();\n});\nSchema::create('tags', function (Blueprint $table) {\n    $table->string('label');\n});\n";
    let fs = MemFileSystem::new().with_file("m/create.php", source);

    let columns = extract_columns(&fs, &[PathBuf::from("m/create.php")]).unwrap();

    assert_eq!(columns.keys().collect::<Vec<_>>(), ["id"]);
}

#[test]
fn multi_line_statements_are_skipped() {
    let mut columns = Columns::new();
    parse_schema_body(
        "$table->string('slug')\n    ->unique();\n$table->string('title');",
        &mut columns,
    );

    assert_eq!(columns.keys().collect::<Vec<_>>(), ["title"]);
}

#[test]
fn missing_file_is_an_error() {
    let fs = MemFileSystem::new();
    let err = extract_columns(&fs, &[PathBuf::from("missing.php")]).unwrap_err();
    assert!(err.to_string().contains("missing.php"), "{err}");
}

#[test]
fn invalid_utf8_outside_statements_is_tolerated() {
    let mut source = migration("posts", "create", "            $table->string('title');").into_bytes();
    source.extend_from_slice(b"// r\xe9sum\xe9\n");

    let fs = MemFileSystem::new().with_bytes("database/migrations/create_posts.php", source);

    let columns = extract_columns(
        &fs,
        &[PathBuf::from("database/migrations/create_posts.php")],
    )
    .unwrap();

    assert_eq!(rendered(&columns), pairs(&[("title", "string")]));
}

#[test]
fn missing_migration_names_the_file() {
    let fs = MemFileSystem::new();

    let err = extract_columns(&fs, &[PathBuf::from("database/migrations/gone.php")]).unwrap_err();

    assert!(err.to_string().starts_with("failed to read database/migrations/gone.php: "));
}
