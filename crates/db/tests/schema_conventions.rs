use sqlx::PgPool;

/// Entity tables; the link table is checked separately.
const ENTITY_TABLES: [&str; 7] = [
    "product_infos",
    "products",
    "product_properties",
    "child_properties",
    "product_children",
    "colors",
    "frame_moldings",
];

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), ENTITY_TABLES.len());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every entity table has created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entity_tables_have_timestamps(pool: PgPool) {
    for table in ENTITY_TABLES {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// The link table carries only the two foreign keys, which form its primary key.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_table_is_pure_pair(pool: PgPool) {
    let columns: Vec<(String,)> = sqlx::query_as(
        "SELECT column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND table_name = 'product_property_links'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    let columns: Vec<&str> = columns.iter().map(|(c,)| c.as_str()).collect();
    assert_eq!(columns, ["product_id", "product_property_id"]);

    let pk_columns: Vec<(String,)> = sqlx::query_as(
        "SELECT kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
           ON kcu.constraint_name = tc.constraint_name
          AND kcu.table_name = tc.table_name
         WHERE tc.table_name = 'product_property_links'
           AND tc.constraint_type = 'PRIMARY KEY'
         ORDER BY kcu.ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(pk_columns.len(), 2);
}

/// Every foreign key in the catalog cascades on delete.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_cascade(pool: PgPool) {
    let rules: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name, delete_rule
         FROM information_schema.referential_constraints
         WHERE constraint_schema = 'public'
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rules.len(), 6);
    for (constraint, rule) in &rules {
        assert_eq!(rule, "CASCADE", "{constraint} should cascade");
    }
}
