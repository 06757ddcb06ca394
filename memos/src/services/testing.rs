//! In-process fakes for the generation and persistence boundaries.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::{DatabaseBackend, MemoStore};
use crate::error::{MemoError, Result};
use crate::llm::TextGenerator;
use crate::models::{Memo, MemoPatch};

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Upstream(String),
    MissingKey,
}

/// Returns a canned reply and counts invocations.
pub struct FakeGenerator {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream(message) => Err(MemoError::Upstream(message.clone())),
            Reply::MissingKey => Err(MemoError::Configuration(
                "LLM_API_KEY (or GEMINI_API_KEY) is not set".to_string(),
            )),
        }
    }
}

/// Vec-backed store. `failing_updates` makes every `update_memo` error;
/// `unreachable` makes `ping` error.
#[derive(Default)]
pub struct InMemoryStore {
    memos: Mutex<Vec<Memo>>,
    failing_updates: bool,
    unreachable: bool,
    update_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn failing_updates() -> Self {
        Self {
            failing_updates: true,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }

    pub fn with_memo(self, memo: Memo) -> Self {
        self.memos.lock().unwrap().push(memo);
        self
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self, id: &str) -> Option<Memo> {
        self.memos.lock().unwrap().iter().find(|m| m.id == id).cloned()
    }
}

#[async_trait]
impl MemoStore for InMemoryStore {
    async fn create_memo(&self, memo: &Memo) -> Result<()> {
        self.memos.lock().unwrap().push(memo.clone());
        Ok(())
    }

    async fn get_memo_by_id(&self, id: &str) -> Result<Option<Memo>> {
        Ok(self.snapshot(id))
    }

    async fn list_memos(&self) -> Result<Vec<Memo>> {
        let mut memos = self.memos.lock().unwrap().clone();
        memos.reverse();
        Ok(memos)
    }

    async fn update_memo(&self, id: &str, patch: &MemoPatch) -> Result<Option<Memo>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_updates {
            return Err(MemoError::Internal("store is read-only".to_string()));
        }
        let mut memos = self.memos.lock().unwrap();
        let Some(memo) = memos.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        memo.apply(patch.clone());
        Ok(Some(memo.clone()))
    }

    async fn delete_memo(&self, id: &str) -> Result<bool> {
        let mut memos = self.memos.lock().unwrap();
        let before = memos.len();
        memos.retain(|m| m.id != id);
        Ok(memos.len() < before)
    }

    async fn delete_all_memos(&self) -> Result<u64> {
        let mut memos = self.memos.lock().unwrap();
        let removed = memos.len() as u64;
        memos.clear();
        Ok(removed)
    }
}

#[async_trait]
impl DatabaseBackend for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        if self.unreachable {
            return Err(MemoError::Internal("database is unreachable".to_string()));
        }
        Ok(())
    }
}
