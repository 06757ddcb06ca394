//! Summary and tag generation DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::{GenerationRequest, GenerationResult};

/// Request body for `POST /v1/memos/summary`.
///
/// Missing or null `title` and `content` become empty strings so the service
/// can answer with its own validation message.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// When present, the generated summary is also stored on this memo.
    pub memo_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SummaryRequest {
    pub fn into_parts(self) -> (Option<String>, GenerationRequest) {
        let request = GenerationRequest::new(
            self.title.unwrap_or_default(),
            self.content.unwrap_or_default(),
        );
        (self.memo_id, request)
    }
}

/// Request body for `POST /v1/memos/tags`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct TagsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<TagsRequest> for GenerationRequest {
    fn from(req: TagsRequest) -> Self {
        GenerationRequest::new(req.title.unwrap_or_default(), req.content.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TagsResponse {
    /// Up to five distinct tags, in the order the model produced them.
    pub tags: Vec<String>,
}

/// Success body of either generation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Summary(SummaryResponse),
    Tags(TagsResponse),
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Summary(summary) => Self::Summary(SummaryResponse { summary }),
            GenerationResult::Tags(tags) => Self::Tags(TagsResponse { tags }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_missing_fields_become_empty() {
        let req: SummaryRequest =
            serde_json::from_value(json!({ "memoId": "m1", "title": null })).unwrap();
        let (memo_id, request) = req.into_parts();
        assert_eq!(memo_id.as_deref(), Some("m1"));
        assert_eq!(request, GenerationRequest::new("", ""));

        let req: TagsRequest =
            serde_json::from_value(json!({ "title": "t", "content": null })).unwrap();
        assert_eq!(GenerationRequest::from(req), GenerationRequest::new("t", ""));
    }

    #[test]
    fn generation_result_serializes_per_endpoint() {
        let summary = GenerationResponse::from(GenerationResult::Summary("s".to_string()));
        assert_eq!(serde_json::to_value(summary).unwrap(), json!({ "summary": "s" }));

        let tags = GenerationResponse::from(GenerationResult::Tags(vec!["a".to_string()]));
        assert_eq!(serde_json::to_value(tags).unwrap(), json!({ "tags": ["a"] }));
    }
}
