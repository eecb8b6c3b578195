//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the User Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "1.0.0",
        description = "CRUD API over an in-memory user directory"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Users", description = "User directory endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_user_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "User Directory API");
        assert_eq!(doc.info.version, "1.0.0");

        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
    }

    #[test]
    fn test_openapi_document_has_api_server() {
        let doc = ApiDoc::openapi();
        let servers = doc.servers.unwrap_or_default();
        assert_eq!(servers[0].url, "/api");
    }
}
