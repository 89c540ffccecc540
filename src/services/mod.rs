pub mod leaderboard_service;
pub mod submission_service;

pub use leaderboard_service::LeaderboardService;
pub use submission_service::SubmissionService;
