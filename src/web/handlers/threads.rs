//! Thread handlers for the Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, DeleteOutcome};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadOwnerResponse,
    ThreadSummaryResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/threads/:board - Create a new thread.
///
/// The response is the owner view: the one place the thread's delete
/// password is echoed back, to the caller who just chose it.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateThreadRequest>,
) -> Result<Json<ThreadOwnerResponse>, ApiError> {
    let (Some(text), Some(delete_password)) = (req.text, req.delete_password) else {
        return Err(ApiError::bad_request("missing fields"));
    };

    let service = BoardService::new(&state.db);
    let thread = service.create_thread(&board, &text, &delete_password).await?;

    Ok(Json(ThreadOwnerResponse::from(&thread)))
}

/// GET /api/threads/:board - List the most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummaryResponse>>, ApiError> {
    let service = BoardService::new(&state.db);
    let threads = service.recent_threads(&board).await?;

    let summaries = threads.iter().map(ThreadSummaryResponse::from).collect();
    Ok(Json(summaries))
}

/// PUT /api/threads/:board - Report a thread.
///
/// Anonymous by design: no password is required to flag content. A
/// thread_id that matches nothing still acknowledges with "reported".
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let Some(thread_id) = req.thread_id else {
        return Err(ApiError::bad_request("missing thread_id"));
    };

    let service = BoardService::new(&state.db);
    service.report_thread(&board, &thread_id).await?;

    Ok("reported")
}

/// DELETE /api/threads/:board - Delete a thread with its password.
///
/// A missing thread and a wrong password produce the same body, so the
/// endpoint cannot be used to probe for thread existence.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let (Some(thread_id), Some(delete_password)) = (req.thread_id, req.delete_password) else {
        return Err(ApiError::bad_request("missing fields"));
    };

    let service = BoardService::new(&state.db);
    match service
        .delete_thread(&board, &thread_id, &delete_password)
        .await?
    {
        DeleteOutcome::Deleted => Ok("success"),
        DeleteOutcome::IncorrectPassword => Ok("incorrect password"),
    }
}
