//! Schema setup for the snippets table

use sqlx::PgPool;

use super::pool::ConnectionPool;

/// Create the snippets table and its index if they do not exist.
pub async fn run(pool: &ConnectionPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running snippet migrations...");
    let pool: &PgPool = pool.inner();

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS snippets (
            id SERIAL PRIMARY KEY,
            title VARCHAR(100) NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            expires TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets(created)")
        .execute(pool)
        .await?;

    tracing::info!("Snippet migrations complete");
    Ok(())
}
