//! Reply handlers for the Web API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, DeleteOutcome};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadDetailResponse,
    ThreadOwnerResponse, ThreadQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/replies/:board - Create a reply on an existing thread.
///
/// Responds with the whole updated thread in the owner view; the append
/// and the thread bump are a single atomic unit.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateReplyRequest>,
) -> Result<Json<ThreadOwnerResponse>, ApiError> {
    let (Some(thread_id), Some(text), Some(delete_password)) =
        (req.thread_id, req.text, req.delete_password)
    else {
        return Err(ApiError::bad_request("missing fields"));
    };

    let service = BoardService::new(&state.db);
    let thread = service
        .create_reply(&board, &thread_id, &text, &delete_password)
        .await?;

    Ok(Json(ThreadOwnerResponse::from(&thread)))
}

/// GET /api/replies/:board?thread_id= - Fetch a single thread.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadDetailResponse>, ApiError> {
    let Some(thread_id) = query.thread_id else {
        return Err(ApiError::bad_request("missing thread_id"));
    };

    let service = BoardService::new(&state.db);
    let thread = service.get_thread(&board, &thread_id).await?;

    Ok(Json(ThreadDetailResponse::from(&thread)))
}

/// PUT /api/replies/:board - Report a reply. Anonymous, no-op on miss.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let (Some(thread_id), Some(reply_id)) = (req.thread_id, req.reply_id) else {
        return Err(ApiError::bad_request("missing fields"));
    };

    let service = BoardService::new(&state.db);
    service.report_reply(&board, &thread_id, &reply_id).await?;

    Ok("reported")
}

/// DELETE /api/replies/:board - Redact a reply with its password.
///
/// The reply is kept in place with its text replaced by the redaction
/// sentinel; missing thread, missing reply and wrong password all yield
/// the same body.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let (Some(thread_id), Some(reply_id), Some(delete_password)) =
        (req.thread_id, req.reply_id, req.delete_password)
    else {
        return Err(ApiError::bad_request("missing fields"));
    };

    let service = BoardService::new(&state.db);
    match service
        .delete_reply(&board, &thread_id, &reply_id, &delete_password)
        .await?
    {
        DeleteOutcome::Deleted => Ok("success"),
        DeleteOutcome::IncorrectPassword => Ok("incorrect password"),
    }
}
