use std::sync::Arc;

use nanoid::nanoid;

use crate::db::DatabaseBackend;
use crate::error::{MemoError, Result};
use crate::models::{normalize_tags, Memo, MemoFilter, MemoPatch, MemoStats, NewMemo};

#[derive(Clone)]
pub struct MemoService {
    db: Arc<dyn DatabaseBackend>,
}

impl MemoService {
    pub fn new(db: Arc<dyn DatabaseBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_memo: NewMemo) -> Result<Memo> {
        require_text("title", &new_memo.title)?;
        require_text("content", &new_memo.content)?;

        let mut memo = Memo::new(nanoid!(), new_memo.title, new_memo.content);
        memo.category = new_memo.category;
        memo.tags = normalize_tags(&new_memo.tags);

        self.db.create_memo(&memo).await?;
        tracing::info!(memo_id = %memo.id, category = %memo.category, "Created memo");
        Ok(memo)
    }

    pub async fn get(&self, id: &str) -> Result<Memo> {
        self.db
            .get_memo_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: &str, mut patch: MemoPatch) -> Result<Memo> {
        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(content) = &patch.content {
            require_text("content", content)?;
        }
        if let Some(tags) = patch.tags.take() {
            patch.tags = Some(normalize_tags(&tags));
        }

        let memo = self
            .db
            .update_memo(id, &patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::debug!(memo_id = %id, "Updated memo");
        Ok(memo)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.db.delete_memo(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(memo_id = %id, "Deleted memo");
        Ok(())
    }

    /// Newest first, narrowed by `filter`.
    pub async fn list(&self, filter: &MemoFilter) -> Result<Vec<Memo>> {
        let memos = self.db.list_memos().await?;
        Ok(filter.apply(memos))
    }

    pub async fn stats(&self, filter: &MemoFilter) -> Result<MemoStats> {
        let memos = self.db.list_memos().await?;
        Ok(MemoStats::compute(&memos, filter))
    }

    pub async fn clear(&self) -> Result<u64> {
        let deleted = self.db.delete_all_memos().await?;
        tracing::info!(deleted, "Cleared all memos");
        Ok(deleted)
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MemoError::Validation(format!("Memo {field} cannot be empty")));
    }
    Ok(())
}

fn not_found(id: &str) -> MemoError {
    MemoError::NotFound(format!("Memo {id} not found"))
}
