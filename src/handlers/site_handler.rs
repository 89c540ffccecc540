use std::io::ErrorKind;

use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::HealthResponse};

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Serves the configured landing page.
#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let path = state
        .config
        .static_index_path
        .as_ref()
        .ok_or_else(|| AppError::NotFound("Index page is not configured".to_string()))?;

    let page = tokio::fs::read(path).await.map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("{} not found", path.display())),
        _ => {
            log::error!("Error reading index page {}: {}", path.display(), err);
            AppError::from(err)
        }
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
