use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Memo, MemoCategory};

/// In-memory filter over a memo list: category plus free-text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoFilter {
    pub query: Option<String>,
    /// `None` matches every category.
    pub category: Option<MemoCategory>,
}

impl MemoFilter {
    pub fn new(query: Option<String>, category: Option<MemoCategory>) -> Self {
        Self { query, category }
    }

    /// Case-insensitive substring match on title, content, or any tag.
    pub fn matches(&self, memo: &Memo) -> bool {
        if let Some(category) = self.category {
            if memo.category != category {
                return false;
            }
        }

        let Some(query) = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        else {
            return true;
        };

        let query = query.to_lowercase();
        memo.title.to_lowercase().contains(&query)
            || memo.content.to_lowercase().contains(&query)
            || memo
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    pub fn apply(&self, memos: Vec<Memo>) -> Vec<Memo> {
        memos.into_iter().filter(|memo| self.matches(memo)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoStats {
    pub total: usize,
    pub by_category: BTreeMap<MemoCategory, usize>,
    pub filtered: usize,
}

impl MemoStats {
    pub fn compute(memos: &[Memo], filter: &MemoFilter) -> Self {
        let mut by_category = BTreeMap::new();
        for memo in memos {
            *by_category.entry(memo.category).or_insert(0) += 1;
        }

        Self {
            total: memos.len(),
            by_category,
            filtered: memos.iter().filter(|memo| filter.matches(memo)).count(),
        }
    }
}
