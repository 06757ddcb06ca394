use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let memos = Router::new()
        .route(
            "/",
            get(handlers::memos::list_memos)
                .post(handlers::memos::create_memo)
                .delete(handlers::memos::clear_memos),
        )
        .route("/stats", get(handlers::memos::memo_stats))
        .route("/summary", post(handlers::generation::generate_summary))
        .route("/tags", post(handlers::generation::generate_tags))
        .route(
            "/{memoId}",
            get(handlers::memos::get_memo)
                .patch(handlers::memos::update_memo)
                .delete(handlers::memos::delete_memo),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .nest("/memos", memos)
}
