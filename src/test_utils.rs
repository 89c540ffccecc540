#[cfg(test)]
pub mod fixtures {
    use mongodb::bson::{oid::ObjectId, DateTime};

    use crate::models::{domain::QuizResult, dto::request::SubmitQuizResultRequest};

    /// A stored result with a fixed submission time in epoch milliseconds.
    pub fn quiz_result_at(name: &str, score: f64, quiz_date_millis: i64) -> QuizResult {
        QuizResult {
            id: ObjectId::new(),
            name: name.to_string(),
            department: "Engineering".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            score,
            total_questions: 10.0,
            quiz_date: DateTime::from_millis(quiz_date_millis),
            version: 0,
        }
    }

    /// A complete submission body.
    pub fn submit_request(name: &str, score: f64, total_questions: f64) -> SubmitQuizResultRequest {
        SubmitQuizResultRequest {
            name: Some(name.to_string()),
            department: Some("Engineering".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            score: Some(score),
            total_questions: Some(total_questions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_result_at() {
        let result = quiz_result_at("Ada", 42.0, 1_000);
        assert_eq!(result.email, "ada@example.com");
        assert_eq!(result.quiz_date.timestamp_millis(), 1_000);
    }

    #[test]
    fn test_fixtures_submit_request() {
        let request = submit_request("Grace", 0.0, 5.0);
        assert_eq!(request.email.as_deref(), Some("grace@example.com"));
        assert_eq!(request.score, Some(0.0));
    }
}
