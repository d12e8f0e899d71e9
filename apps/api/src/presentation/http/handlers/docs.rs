use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Posts Board API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/posts": {
                "get": { "summary": "List every post, newest first" },
                "post": { "summary": "Create post from JSON body (201 with the stored post)" },
                "put": { "summary": "Update post from JSON body (SUCCESS, or 400 FAIL)" }
            },
            "/posts/list": { "get": { "summary": "Paged list (page, size, count query; malformed values use defaults)" } },
            "/posts/{no}": {
                "get": { "summary": "Get post by number" },
                "delete": { "summary": "Delete post by number (SUCCESS, or 400 FAIL)" }
            },
            "/posts/create": { "post": { "summary": "Create post from form; redirects to /posts/list" } },
            "/posts/update": { "post": { "summary": "Update post from form; redirects to /posts/list" } },
            "/posts/delete/{no}": { "post": { "summary": "Delete post from form; redirects to /posts/list" } },
            "/file/img": { "get": { "summary": "Serve image under the upload directory (filePath, optional width for a PNG thumbnail)" } },
            "/file/download": { "get": { "summary": "Download file under the upload directory as an attachment (filePath)" } }
        }
    }))
}
