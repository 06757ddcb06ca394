//! Memo request/response DTOs for the v1 API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{self, MemoCategory};

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/memos`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoRequest {
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Defaults to `personal`.
    #[serde(default)]
    pub category: MemoCategory,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateMemoRequest> for models::NewMemo {
    fn from(req: CreateMemoRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            category: req.category,
            tags: req.tags,
        }
    }
}

/// Request body for `PATCH /v1/memos/{memoId}`. Omitted fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemoRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<MemoCategory>,
    /// Replaces the whole tag list.
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl From<UpdateMemoRequest> for models::MemoPatch {
    fn from(req: UpdateMemoRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            category: req.category,
            tags: req.tags,
            summary: req.summary,
        }
    }
}

/// Query parameters for `GET /v1/memos` and `GET /v1/memos/stats`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListMemosQuery {
    /// Case-insensitive match against title, content and tags.
    pub q: Option<String>,
    /// Restrict to one category. `all` or empty means no restriction.
    pub category: Option<String>,
}

impl ListMemosQuery {
    pub fn into_filter(self) -> crate::error::Result<models::MemoFilter> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) if value.eq_ignore_ascii_case("all") => None,
            Some(value) => Some(
                value
                    .parse::<MemoCategory>()
                    .map_err(crate::error::MemoError::Validation)?,
            ),
        };
        Ok(models::MemoFilter::new(self.q, category))
    }
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoResponse {
    /// Unique memo ID (nanoid, 21 chars).
    pub memo_id: String,
    pub title: String,
    pub content: String,
    pub category: MemoCategory,
    pub tags: Vec<String>,
    /// AI summary. Absent until one has been generated for this memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::Memo> for MemoResponse {
    fn from(memo: models::Memo) -> Self {
        Self {
            memo_id: memo.id,
            title: memo.title,
            content: memo.content,
            category: memo.category,
            tags: memo.tags,
            summary: memo.summary,
            created_at: memo.created_at,
            updated_at: memo.updated_at,
        }
    }
}

/// Response for `GET /v1/memos`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ListMemosResponse {
    pub memos: Vec<MemoResponse>,
}

/// Response for `DELETE /v1/memos/{memoId}`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMemoResponse {
    pub memo_id: String,
    pub deleted: bool,
}

/// Response for `DELETE /v1/memos`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ClearMemosResponse {
    /// Number of memos removed.
    pub deleted: u64,
}

/// Response for `GET /v1/memos/stats`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoStatsResponse {
    pub total: usize,
    /// Memo count per category. Categories without memos are omitted.
    #[schema(value_type = Object)]
    pub by_category: BTreeMap<MemoCategory, usize>,
    /// Memos matching the query parameters.
    pub filtered: usize,
}

impl From<models::MemoStats> for MemoStatsResponse {
    fn from(stats: models::MemoStats) -> Self {
        Self {
            total: stats.total,
            by_category: stats.by_category,
            filtered: stats.filtered,
        }
    }
}
