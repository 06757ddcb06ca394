use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Memos table
        CREATE TABLE IF NOT EXISTS memos (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL CHECK (length(title) > 0),
            content TEXT NOT NULL CHECK (length(content) > 0),
            category TEXT NOT NULL DEFAULT 'personal',
            tags TEXT NOT NULL DEFAULT '[]',
            summary TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_memos_created_at ON memos(created_at);
        CREATE INDEX IF NOT EXISTS idx_memos_category ON memos(category);
        "#,
    )
    .await?;

    Ok(())
}
