use crate::db::connection::Database;
use crate::db::repository::MemoRepository;
use crate::db::traits::{DatabaseBackend, MemoStore};
use crate::error::Result;
use crate::models::{Memo, MemoPatch};
use async_trait::async_trait;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemoStore for LibSqlBackend {
    async fn create_memo(&self, memo: &Memo) -> Result<()> {
        let conn = self.db.connect()?;
        MemoRepository::create(&conn, memo).await
    }
    async fn get_memo_by_id(&self, id: &str) -> Result<Option<Memo>> {
        let conn = self.db.connect()?;
        MemoRepository::get_by_id(&conn, id).await
    }
    async fn list_memos(&self) -> Result<Vec<Memo>> {
        let conn = self.db.connect()?;
        MemoRepository::list(&conn).await
    }
    async fn update_memo(&self, id: &str, patch: &MemoPatch) -> Result<Option<Memo>> {
        let conn = self.db.connect()?;
        MemoRepository::update(&conn, id, patch).await
    }
    async fn delete_memo(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        MemoRepository::delete(&conn, id).await
    }
    async fn delete_all_memos(&self) -> Result<u64> {
        let conn = self.db.connect()?;
        MemoRepository::delete_all(&conn).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn ping(&self) -> Result<()> {
        self.db.ping().await
    }
}
