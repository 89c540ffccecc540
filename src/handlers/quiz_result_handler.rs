use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::SubmitQuizResultRequest,
};

#[post("/api/quiz-results")]
pub async fn submit_quiz_result(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizResultRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let response = state
        .submission_service
        .submit(request.into_inner())
        .await?;

    log::info!(
        "[{}] saved quiz result {}",
        get_request_id(&req).unwrap_or_default(),
        response.data.id
    );
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/leaderboard")]
pub async fn get_leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let leaderboard = state.leaderboard_service.top_scores().await?;
    Ok(HttpResponse::Ok().json(leaderboard))
}
