use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{Memo, MemoPatch};

const MEMO_COLUMNS: &str = "id, title, content, category, tags, summary, created_at, updated_at";

pub struct MemoRepository;

impl MemoRepository {
    pub async fn create(conn: &Connection, memo: &Memo) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO memos (
                id, title, content, category, tags, summary, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                memo.id.clone(),
                memo.title.clone(),
                memo.content.clone(),
                memo.category.to_string(),
                serde_json::to_string(&memo.tags)?,
                memo.summary.clone(),
                memo.created_at.to_rfc3339(),
                memo.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Memo>> {
        let sql = format!("SELECT {MEMO_COLUMNS} FROM memos WHERE id = ?1");
        let mut rows = conn.query(&sql, params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_memo(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(conn: &Connection) -> Result<Vec<Memo>> {
        let sql = format!("SELECT {MEMO_COLUMNS} FROM memos ORDER BY created_at DESC, rowid DESC");
        let mut rows = conn.query(&sql, ()).await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_memo(&row)?);
        }
        Ok(results)
    }

    pub async fn update(conn: &Connection, id: &str, patch: &MemoPatch) -> Result<Option<Memo>> {
        if patch.is_empty() {
            return Self::get_by_id(conn, id).await;
        }

        let mut assignments: Vec<String> = Vec::new();
        let mut values: Vec<libsql::Value> = Vec::new();

        let mut push = |column: &str, value: libsql::Value| {
            values.push(value);
            assignments.push(format!("{column} = ?{}", values.len()));
        };

        if let Some(title) = &patch.title {
            push("title", libsql::Value::from(title.clone()));
        }
        if let Some(content) = &patch.content {
            push("content", libsql::Value::from(content.clone()));
        }
        if let Some(category) = &patch.category {
            push("category", libsql::Value::from(category.to_string()));
        }
        if let Some(tags) = &patch.tags {
            push("tags", libsql::Value::from(serde_json::to_string(tags)?));
        }
        if let Some(summary) = &patch.summary {
            push("summary", libsql::Value::from(summary.clone()));
        }
        push("updated_at", libsql::Value::from(Utc::now().to_rfc3339()));

        values.push(libsql::Value::from(id.to_string()));
        let sql = format!(
            "UPDATE memos SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );

        let affected = conn.execute(&sql, libsql::params_from_iter(values)).await?;
        if affected == 0 {
            return Ok(None);
        }

        Self::get_by_id(conn, id).await
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM memos WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub async fn delete_all(conn: &Connection) -> Result<u64> {
        let affected = conn.execute("DELETE FROM memos", ()).await?;
        Ok(affected)
    }

    pub fn row_to_memo(row: &libsql::Row) -> Result<Memo> {
        Ok(Memo {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            category: row.get::<String>(3)?.parse().unwrap_or_default(),
            tags: serde_json::from_str(&row.get::<String>(4)?).unwrap_or_default(),
            summary: row.get(5)?,
            created_at: parse_timestamp(&row.get::<String>(6)?),
            updated_at: parse_timestamp(&row.get::<String>(7)?),
        })
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
