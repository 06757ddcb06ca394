use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemoCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: MemoCategory,
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn new(id: String, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            category: MemoCategory::default(),
            tags: Vec::new(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the `Some` fields of a patch in place.
    #[cfg(test)]
    pub(crate) fn apply(&mut self, patch: MemoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(summary) = patch.summary {
            self.summary = Some(summary);
        }
        self.updated_at = Utc::now();
    }
}

/// Insert payload for a new memo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMemo {
    pub title: String,
    pub content: String,
    pub category: MemoCategory,
    pub tags: Vec<String>,
}

/// Partial update of a memo row. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<MemoCategory>,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl MemoPatch {
    /// Patch that touches nothing but the generated summary.
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.summary.is_none()
    }
}

/// Trim tags, drop empty ones and keep the first occurrence of each.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !normalized.iter().any(|existing| existing == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_memo_defaults() {
        let memo = Memo::new(
            "memo_1".to_string(),
            "Groceries".to_string(),
            "- milk\n- eggs".to_string(),
        );
        assert_eq!(memo.category, MemoCategory::Personal);
        assert!(memo.tags.is_empty());
        assert!(memo.summary.is_none());
        assert_eq!(memo.created_at, memo.updated_at);
    }

    #[test]
    fn test_summary_patch_only_sets_summary() {
        let patch = MemoPatch::summary("short");
        assert_eq!(patch.summary.as_deref(), Some("short"));
        assert!(patch.title.is_none());
        assert!(patch.content.is_none());
        assert!(patch.category.is_none());
        assert!(patch.tags.is_none());
        assert!(!patch.is_empty());
        assert!(MemoPatch::default().is_empty());
    }

    #[test]
    fn test_apply_patch_keeps_untouched_fields() {
        let mut memo = Memo::new("m".to_string(), "t".to_string(), "c".to_string());
        memo.tags = vec!["a".to_string()];

        memo.apply(MemoPatch {
            category: Some(MemoCategory::Work),
            ..Default::default()
        });

        assert_eq!(memo.title, "t");
        assert_eq!(memo.tags, vec!["a".to_string()]);
        assert_eq!(memo.category, MemoCategory::Work);
        assert!(memo.updated_at >= memo.created_at);
    }

    #[test]
    fn test_normalize_tags() {
        let tags = normalize_tags([" rust ", "", "web", "rust", "  "]);
        assert_eq!(tags, vec!["rust".to_string(), "web".to_string()]);
    }
}
