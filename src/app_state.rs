use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizResultRepository, QuizResultRepository},
    services::{LeaderboardService, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        match db.ping().await {
            Ok(()) => log::info!("Connected to MongoDB database '{}'", db.db_name()),
            Err(err) => log::error!("Could not connect to MongoDB: {}", err),
        }

        let repository = MongoQuizResultRepository::new(&db, &config.quiz_results_collection);
        if let Err(err) = repository.ensure_indexes().await {
            log::warn!("Could not create leaderboard index: {}", err);
        }

        Ok(Self::from_repository(Arc::new(repository), config))
    }

    pub fn from_repository(repository: Arc<dyn QuizResultRepository>, config: Config) -> Self {
        let submission_service = Arc::new(SubmissionService::new(repository.clone()));
        let leaderboard_service = Arc::new(LeaderboardService::new(
            repository,
            config.leaderboard_hide_email,
        ));

        Self {
            submission_service,
            leaderboard_service,
            config: Arc::new(config),
        }
    }
}
