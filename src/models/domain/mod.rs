pub mod quiz_result;
pub use quiz_result::{QuizResult, LEADERBOARD_LIMIT};
