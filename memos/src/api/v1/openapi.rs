use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memos API",
        version = "1.0.0",
        description = "Markdown memos with AI-generated summaries and tags.",
    ),
    paths(
        handlers::health::health_check,
        handlers::memos::create_memo,
        handlers::memos::get_memo,
        handlers::memos::update_memo,
        handlers::memos::delete_memo,
        handlers::memos::list_memos,
        handlers::memos::memo_stats,
        handlers::memos::clear_memos,
        handlers::generation::generate_summary,
        handlers::generation::generate_tags,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Memos
        crate::models::MemoCategory,
        dto::memos::CreateMemoRequest,
        dto::memos::UpdateMemoRequest,
        dto::memos::ListMemosQuery,
        dto::memos::MemoResponse,
        dto::memos::ListMemosResponse,
        dto::memos::DeleteMemoResponse,
        dto::memos::ClearMemosResponse,
        dto::memos::MemoStatsResponse,
        // Generation
        dto::generation::SummaryRequest,
        dto::generation::SummaryResponse,
        dto::generation::TagsRequest,
        dto::generation::TagsResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "memos", description = "Memo CRUD, listing, and statistics"),
        (name = "generation", description = "AI summary and tag suggestions"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
