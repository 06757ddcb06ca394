//! v1 Memo CRUD handlers.

use axum::extract::{Path, State};
use axum_extra::extract::Query;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{
    ClearMemosResponse, CreateMemoRequest, DeleteMemoResponse, ListMemosQuery, ListMemosResponse,
    MemoResponse, MemoStatsResponse, UpdateMemoRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ResponseMeta};
use crate::api::AppState;

/// `POST /api/v1/memos`
#[utoipa::path(
    post,
    path = "/api/v1/memos",
    tag = "memos",
    operation_id = "memos.create",
    request_body = CreateMemoRequest,
    responses(
        (status = 201, description = "Memo created", body = MemoResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_memo(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMemoRequest>,
) -> ApiResponse<MemoResponse> {
    match state.memos.create(req.into()).await {
        Ok(memo) => ApiResponse::created(MemoResponse::from(memo)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/memos/{memoId}`
#[utoipa::path(
    get,
    path = "/api/v1/memos/{memoId}",
    tag = "memos",
    operation_id = "memos.get",
    params(("memoId" = String, Path, description = "Memo ID")),
    responses(
        (status = 200, description = "Memo found", body = MemoResponse),
        (status = 404, description = "Memo not found", body = ApiError),
    )
)]
pub async fn get_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<MemoResponse> {
    match state.memos.get(&id).await {
        Ok(memo) => ApiResponse::success(MemoResponse::from(memo)),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/memos/{memoId}`
#[utoipa::path(
    patch,
    path = "/api/v1/memos/{memoId}",
    tag = "memos",
    operation_id = "memos.update",
    params(("memoId" = String, Path, description = "Memo ID")),
    request_body = UpdateMemoRequest,
    responses(
        (status = 200, description = "Memo updated", body = MemoResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Memo not found", body = ApiError),
    )
)]
pub async fn update_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateMemoRequest>,
) -> ApiResponse<MemoResponse> {
    match state.memos.update(&id, req.into()).await {
        Ok(memo) => ApiResponse::success(MemoResponse::from(memo)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/memos/{memoId}`
#[utoipa::path(
    delete,
    path = "/api/v1/memos/{memoId}",
    tag = "memos",
    operation_id = "memos.delete",
    params(("memoId" = String, Path, description = "Memo ID")),
    responses(
        (status = 200, description = "Memo deleted", body = DeleteMemoResponse),
        (status = 404, description = "Memo not found", body = ApiError),
    )
)]
pub async fn delete_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteMemoResponse> {
    match state.memos.delete(&id).await {
        Ok(()) => ApiResponse::success(DeleteMemoResponse {
            memo_id: id,
            deleted: true,
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/memos`
///
/// Lists all memos newest first. `q` and `category` narrow the list.
#[utoipa::path(
    get,
    path = "/api/v1/memos",
    tag = "memos",
    operation_id = "memos.list",
    params(ListMemosQuery),
    responses(
        (status = 200, description = "Memos listed", body = ListMemosResponse),
        (status = 400, description = "Unknown category", body = ApiError),
    )
)]
pub async fn list_memos(
    State(state): State<AppState>,
    Query(query): Query<ListMemosQuery>,
) -> ApiResponse<ListMemosResponse> {
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(e) => return e.into(),
    };

    match state.memos.list(&filter).await {
        Ok(memos) => {
            let total = memos.len() as u64;
            ApiResponse::success_with_meta(
                ListMemosResponse {
                    memos: memos.into_iter().map(MemoResponse::from).collect(),
                },
                ResponseMeta { total: Some(total) },
            )
        }
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/memos/stats`
#[utoipa::path(
    get,
    path = "/api/v1/memos/stats",
    tag = "memos",
    operation_id = "memos.stats",
    params(ListMemosQuery),
    responses(
        (status = 200, description = "Memo statistics", body = MemoStatsResponse),
        (status = 400, description = "Unknown category", body = ApiError),
    )
)]
pub async fn memo_stats(
    State(state): State<AppState>,
    Query(query): Query<ListMemosQuery>,
) -> ApiResponse<MemoStatsResponse> {
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(e) => return e.into(),
    };

    match state.memos.stats(&filter).await {
        Ok(stats) => ApiResponse::success(MemoStatsResponse::from(stats)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/memos`
#[utoipa::path(
    delete,
    path = "/api/v1/memos",
    tag = "memos",
    operation_id = "memos.clear",
    responses(
        (status = 200, description = "All memos deleted", body = ClearMemosResponse),
    )
)]
pub async fn clear_memos(State(state): State<AppState>) -> ApiResponse<ClearMemosResponse> {
    match state.memos.clear().await {
        Ok(deleted) => ApiResponse::success(ClearMemosResponse { deleted }),
        Err(e) => e.into(),
    }
}
