//! v1 AI summary and tag handlers.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{
    GenerationResponse, SummaryRequest, SummaryResponse, TagsRequest, TagsResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::{GenerationKind, GenerationRequest};

/// `POST /api/v1/memos/summary`
///
/// Generates a short summary. With `memoId`, the summary is also stored on
/// that memo; a failed store does not fail the request.
#[utoipa::path(
    post,
    path = "/api/v1/memos/summary",
    tag = "generation",
    operation_id = "memos.summarize",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary generated", body = SummaryResponse),
        (status = 400, description = "Title or content missing", body = ApiError),
        (status = 500, description = "Configuration, upstream, or empty-result failure", body = ApiError),
    )
)]
pub async fn generate_summary(
    State(state): State<AppState>,
    AppJson(req): AppJson<SummaryRequest>,
) -> ApiResponse<GenerationResponse> {
    let (memo_id, request) = req.into_parts();
    run_generation(&state, memo_id.as_deref(), request, GenerationKind::Summary).await
}

/// `POST /api/v1/memos/tags`
///
/// Suggests up to five tags. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/v1/memos/tags",
    tag = "generation",
    operation_id = "memos.suggestTags",
    request_body = TagsRequest,
    responses(
        (status = 200, description = "Tags generated", body = TagsResponse),
        (status = 400, description = "Title or content missing", body = ApiError),
        (status = 500, description = "Configuration, upstream, or empty-result failure", body = ApiError),
    )
)]
pub async fn generate_tags(
    State(state): State<AppState>,
    AppJson(req): AppJson<TagsRequest>,
) -> ApiResponse<GenerationResponse> {
    run_generation(&state, None, req.into(), GenerationKind::Tags).await
}

async fn run_generation(
    state: &AppState,
    memo_id: Option<&str>,
    request: GenerationRequest,
    kind: GenerationKind,
) -> ApiResponse<GenerationResponse> {
    match state.generation.generate(memo_id, &request, kind).await {
        Ok(result) => ApiResponse::success(result.into()),
        Err(e) => {
            tracing::warn!(error = %e, kind = ?kind, "Generation failed");
            e.into()
        }
    }
}
