use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuizResult,
        dto::{
            request::SubmitQuizResultRequest,
            response::{ApiResponse, QuizResultDto, SubmitQuizResultResponse},
        },
    },
    repositories::QuizResultRepository,
};

pub struct SubmissionService {
    repository: Arc<dyn QuizResultRepository>,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn QuizResultRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit(
        &self,
        request: SubmitQuizResultRequest,
    ) -> AppResult<SubmitQuizResultResponse> {
        let result = Self::build_result(request)?;

        let saved = self.repository.create(result).await.map_err(|err| {
            log::error!("Error saving quiz results: {}", err);
            err
        })?;

        Ok(ApiResponse {
            message: "Quiz results saved successfully".to_string(),
            data: QuizResultDto::from(saved),
        })
    }

    fn build_result(request: SubmitQuizResultRequest) -> AppResult<QuizResult> {
        request.validate().map_err(|_| AppError::missing_fields())?;
        if !request.has_questions() {
            return Err(AppError::missing_fields());
        }

        let SubmitQuizResultRequest {
            name: Some(name),
            department: Some(department),
            email: Some(email),
            score: Some(score),
            total_questions: Some(total_questions),
        } = request
        else {
            return Err(AppError::missing_fields());
        };

        Ok(QuizResult::new(name, department, email, score, total_questions))
    }
}
