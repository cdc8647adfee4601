use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::PathRejection, extract::State, extract::Path, http::StatusCode};

/// DELETE /key/{key} handler - Remove a key
///
/// Deleting a key that does not exist succeeds.
#[utoipa::path(
    delete,
    path = routes::KEY_ITEM,
    params(
        ("key" = String, Path, description = "Key to remove")
    ),
    responses(
        (status = 200, description = "Key removed (or was already absent)"),
        (status = 400, description = "Key segment is not valid UTF-8"),
        (status = 404, description = "Missing key segment"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(key) = path?;
    state.store.delete(&key).await?;

    tracing::info!("Deleted key: {}", key);
    Ok(StatusCode::OK)
}
