use crate::error::{ApiError, ErrorResponse};
use crate::models::KeyValuePairs;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode};

/// POST /key handler - Assign one or more keys
///
/// Each pair is forwarded to the store as its own `set`, in body order. A
/// failure stops the loop; pairs already written stay written. The body is
/// decoded whatever the request's content type says.
#[utoipa::path(
    post,
    path = routes::KEY,
    request_body = KeyValuePairs,
    responses(
        (status = 200, description = "All pairs stored"),
        (status = 400, description = "Body is not a JSON object of strings", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let pairs: KeyValuePairs = serde_json::from_slice(&body)?;
    let count = pairs.len();

    for (key, value) in pairs {
        state.store.set(&key, &value).await?;
        tracing::debug!("Stored key: {}", key);
    }

    tracing::info!("Successfully stored {} key(s)", count);
    Ok(StatusCode::OK)
}
