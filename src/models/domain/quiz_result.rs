use std::cmp::Ordering;

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// Number of entries on the leaderboard.
pub const LEADERBOARD_LIMIT: i64 = 10;

/// A single quiz submission as stored in the collection.
///
/// Field names on the wire match the documents already present in the
/// collection (`totalQuestions`, `quizDate`, `__v`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizResult {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub department: String,
    pub email: String,
    pub score: f64,
    #[serde(rename = "totalQuestions")]
    pub total_questions: f64,
    #[serde(rename = "quizDate")]
    pub quiz_date: DateTime,
    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl QuizResult {
    pub fn new(
        name: String,
        department: String,
        email: String,
        score: f64,
        total_questions: f64,
    ) -> Self {
        QuizResult {
            id: ObjectId::new(),
            name,
            department,
            email,
            score,
            total_questions,
            quiz_date: DateTime::now(),
            version: 0,
        }
    }

    /// Sort document for the leaderboard query: highest score first, earliest
    /// submission first among equal scores.
    pub fn leaderboard_sort() -> Document {
        doc! { "score": -1, "quizDate": 1 }
    }

    /// In-process equivalent of [`QuizResult::leaderboard_sort`]. Scores compare
    /// numerically, so `-0` and `0` tie and fall back to the submission time.
    pub fn rank_cmp(a: &QuizResult, b: &QuizResult) -> Ordering {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.quiz_date.cmp(&b.quiz_date))
    }
}
