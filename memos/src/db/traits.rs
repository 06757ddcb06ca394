use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Memo, MemoPatch};

/// CRUD operations for memos.
#[async_trait]
pub trait MemoStore: Send + Sync {
    async fn create_memo(&self, memo: &Memo) -> Result<()>;
    async fn get_memo_by_id(&self, id: &str) -> Result<Option<Memo>>;
    /// All memos, newest first.
    async fn list_memos(&self) -> Result<Vec<Memo>>;
    /// Write only the `Some` fields of `patch`. Returns the updated row, or
    /// `None` when no memo has this id.
    async fn update_memo(&self, id: &str, patch: &MemoPatch) -> Result<Option<Memo>>;
    async fn delete_memo(&self, id: &str) -> Result<bool>;
    async fn delete_all_memos(&self) -> Result<u64>;
}

/// A complete database backend: the memo store plus lifecycle operations.
#[async_trait]
pub trait DatabaseBackend: MemoStore {
    /// Check that the database answers queries.
    async fn ping(&self) -> Result<()>;
}
