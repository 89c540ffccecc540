#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use tokio::sync::RwLock;

use quiz_leaderboard_server::{
    errors::{AppError, AppResult},
    models::domain::QuizResult,
    repositories::QuizResultRepository,
};

/// Collection stand-in that can be switched into an outage.
#[derive(Clone, Default)]
pub struct InMemoryQuizResultRepository {
    results: Arc<RwLock<Vec<QuizResult>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryQuizResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "Server selection timeout: no available servers".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryQuizResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        self.check_available()?;
        let mut results = self.results.write().await;
        results.push(result.clone());
        Ok(result)
    }

    async fn find_top_scores(&self, limit: i64) -> AppResult<Vec<QuizResult>> {
        self.check_available()?;
        let mut results = self.results.read().await.clone();
        results.sort_by(QuizResult::rank_cmp);
        results.truncate(limit.max(0) as usize);
        Ok(results)
    }
}

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
