use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{QuizResult, LEADERBOARD_LIMIT},
        dto::response::QuizResultDto,
    },
    repositories::QuizResultRepository,
};

pub struct LeaderboardService {
    repository: Arc<dyn QuizResultRepository>,
    hide_email: bool,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn QuizResultRepository>, hide_email: bool) -> Self {
        Self {
            repository,
            hide_email,
        }
    }

    pub async fn top_scores(&self) -> AppResult<Vec<QuizResultDto>> {
        let mut results = self
            .repository
            .find_top_scores(LEADERBOARD_LIMIT)
            .await
            .map_err(|err| {
                log::error!("Error fetching leaderboard: {}", err);
                err
            })?;

        // Order and cap hold for every repository, not only the Mongo query.
        results.sort_by(QuizResult::rank_cmp);
        results.truncate(LEADERBOARD_LIMIT as usize);

        Ok(results
            .into_iter()
            .map(QuizResultDto::from)
            .map(|dto| if self.hide_email { dto.without_email() } else { dto })
            .collect())
    }
}
