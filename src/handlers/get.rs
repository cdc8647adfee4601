use crate::error::{ApiError, ErrorResponse};
use crate::models::KeyValuePairs;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::PathRejection, extract::State, extract::Path, http::StatusCode, Json};

/// GET /key/{key} handler - Retrieve the value of a single key
///
/// Always answers with the requested key. A key with no value in the store
/// comes back as `""`.
#[utoipa::path(
    get,
    path = routes::KEY_ITEM,
    params(
        ("key" = String, Path, description = "Key to read")
    ),
    responses(
        (status = 200, description = "Key and its value (empty if absent)", body = KeyValuePairs),
        (status = 400, description = "Key segment is not valid UTF-8"),
        (status = 404, description = "Missing key segment"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<KeyValuePairs>), ApiError> {
    let Path(key) = path?;
    let value = state.store.get(&key).await?;

    tracing::info!("Retrieved key: {}", key);
    Ok((StatusCode::OK, Json(KeyValuePairs::single(key, value))))
}
