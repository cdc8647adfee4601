use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::KeyValuePairs;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kv-httpd API",
        version = "1.0.0",
        description = "HTTP/JSON access layer over a key-value store"
    ),
    paths(
        handlers::get::get_handler,
        handlers::set::set_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            KeyValuePairs,
            ErrorResponse
        )
    ),
    tags(
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
