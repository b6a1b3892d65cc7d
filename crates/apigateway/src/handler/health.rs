use axum::{response::IntoResponse, routing::get};
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Investment API in Rust using Axum, Postgres, and SQLX";

    axum::Json(serde_json::json!({
        "status": "success",
        "message": MESSAGE
    }))
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/api/healthchecker", get(health_checker_handler))
}
