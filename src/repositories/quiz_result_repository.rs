use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult>;
    /// Results in leaderboard order, at most `limit` of them.
    async fn find_top_scores(&self, limit: i64) -> AppResult<Vec<QuizResult>>;
}

pub struct MongoQuizResultRepository {
    collection: Collection<QuizResult>,
}

impl MongoQuizResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!(
            "Creating indexes for {} collection",
            self.collection.name()
        );

        let rank_index = IndexModel::builder()
            .keys(QuizResult::leaderboard_sort())
            .options(
                IndexOptions::builder()
                    .name("leaderboard_rank".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(rank_index).await?;

        log::info!(
            "Successfully created indexes for {} collection",
            self.collection.name()
        );
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for MongoQuizResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_top_scores(&self, limit: i64) -> AppResult<Vec<QuizResult>> {
        let results = self
            .collection
            .find(doc! {})
            .sort(QuizResult::leaderboard_sort())
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }
}
