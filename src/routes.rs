// Route path constants - single source of truth for all API paths

pub const KEY: &str = "/key";
pub const KEY_ITEM: &str = "/key/{key}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
