use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::models::domain::QuizResult;

/// A quiz result as returned over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResultDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(serialize_with = "serialize_number")]
    pub score: f64,
    #[serde(rename = "totalQuestions", serialize_with = "serialize_number")]
    pub total_questions: f64,
    #[serde(rename = "quizDate")]
    pub quiz_date: String,
    #[serde(rename = "__v")]
    pub version: i32,
}

impl QuizResultDto {
    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }
}

impl From<QuizResult> for QuizResultDto {
    fn from(result: QuizResult) -> Self {
        let quiz_date = DateTime::<Utc>::from_timestamp_millis(result.quiz_date.timestamp_millis())
            .unwrap_or_default();

        QuizResultDto {
            id: result.id.to_hex(),
            name: result.name,
            department: result.department,
            email: Some(result.email),
            score: result.score,
            total_questions: result.total_questions,
            quiz_date: iso_timestamp(quiz_date),
            version: result.version,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

pub type SubmitQuizResultResponse = ApiResponse<QuizResultDto>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "OK".to_string(),
            message: "Quiz server is running".to_string(),
            timestamp: iso_timestamp(Utc::now()),
        }
    }
}

/// ISO-8601 in UTC with exactly three fractional digits, e.g. `2024-05-01T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Whole numbers are written as JSON integers so `80` stays `80` on the wire.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
