pub mod quiz_result_handler;
pub mod site_handler;

use actix_web::{error::JsonPayloadError, web};

pub use quiz_result_handler::{get_leaderboard, submit_quiz_result};
pub use site_handler::{health_check, index};

use crate::{
    config::Config,
    errors::{AppError, INVALID_BODY_MESSAGE},
};

/// JSON extractor settings. A body that is empty or sent without a JSON
/// content type is read as an empty submission.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_err = match err {
            JsonPayloadError::ContentType => AppError::missing_fields(),
            JsonPayloadError::Deserialize(ref de) if is_empty_body(de) => {
                AppError::missing_fields()
            }
            other => {
                log::debug!("Rejected request body: {}", other);
                AppError::ValidationError(INVALID_BODY_MESSAGE.to_string())
            }
        };
        app_err.into()
    })
}

// serde_json reports a zero-length document as EOF before the first byte.
fn is_empty_body(err: &serde_json::Error) -> bool {
    err.is_eof() && err.line() == 1 && err.column() == 0
}

/// Registers the API routes plus whichever auxiliary routes are enabled.
pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(json_config())
        .service(submit_quiz_result)
        .service(get_leaderboard);

    if config.enable_health_route {
        cfg.service(health_check);
    }
    if config.static_index_path.is_some() {
        cfg.service(index);
    }
}
