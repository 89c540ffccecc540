use std::{env, path::PathBuf};

use secrecy::SecretString;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/quizDB";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:5500";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: Option<String>,
    pub quiz_results_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: CorsOrigins,
    pub static_index_path: Option<PathBuf>,
    pub enable_health_route: bool,
    pub leaderboard_hide_email: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.iter().any(|origin| origin == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        match self {
            CorsOrigins::Any => true,
            CorsOrigins::List(origins) => origins.iter().any(|allowed| allowed == origin),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            mongo_conn_string: SecretString::from(
                lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            ),
            mongo_db_name: lookup("MONGODB_DB_NAME").filter(|name| !name.is_empty()),
            quiz_results_collection: lookup("QUIZ_RESULTS_COLLECTION")
                .unwrap_or_else(|| "users".to_string()),
            web_server_host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cors_allowed_origins: CorsOrigins::parse(
                &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            static_index_path: match lookup("STATIC_INDEX_PATH") {
                Some(path) if path.trim().is_empty() => None,
                Some(path) => Some(PathBuf::from(path)),
                None => Some(PathBuf::from("index.html")),
            },
            enable_health_route: lookup("ENABLE_HEALTH_ROUTE")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            leaderboard_hide_email: lookup("LEADERBOARD_HIDE_EMAIL")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(
            config.mongo_conn_string.expose_secret(),
            "mongodb://localhost:27017/quizDB"
        );
        assert_eq!(config.mongo_db_name, None);
        assert_eq!(config.quiz_results_collection, "users");
        assert_eq!(config.web_server_port, 3000);
        assert_eq!(config.static_index_path, Some(PathBuf::from("index.html")));
        assert!(config.enable_health_route);
        assert!(!config.leaderboard_hide_email);
        assert!(config.cors_allowed_origins.allows("http://localhost:8080"));
        assert!(config.cors_allowed_origins.allows("http://127.0.0.1:5500"));
        assert!(!config.cors_allowed_origins.allows("https://evil.example"));
    }

    #[test]
    fn test_port_falls_back_when_unparsable() {
        assert_eq!(config_with(&[("PORT", "8081")]).web_server_port, 8081);
        assert_eq!(config_with(&[("PORT", "not-a-port")]).web_server_port, 3000);
    }

    #[test]
    fn test_cors_origin_list_parsing() {
        let config = config_with(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://quiz.example.com , ,http://localhost:3000",
        )]);

        assert_eq!(
            config.cors_allowed_origins,
            CorsOrigins::List(vec![
                "https://quiz.example.com".to_string(),
                "http://localhost:3000".to_string(),
            ])
        );

        let any = config_with(&[("CORS_ALLOWED_ORIGINS", "*")]);
        assert_eq!(any.cors_allowed_origins, CorsOrigins::Any);
        assert!(any.cors_allowed_origins.allows("https://anything.example"));
    }

    #[test]
    fn test_auxiliary_routes_are_configurable() {
        let config = config_with(&[
            ("STATIC_INDEX_PATH", ""),
            ("ENABLE_HEALTH_ROUTE", "false"),
            ("LEADERBOARD_HIDE_EMAIL", "yes"),
        ]);

        assert_eq!(config.static_index_path, None);
        assert!(!config.enable_health_route);
        assert!(config.leaderboard_hide_email);
    }

    #[test]
    fn test_connection_string_is_redacted_in_debug() {
        let config = config_with(&[("MONGODB_URI", "mongodb://admin:hunter2@db:27017")]);
        let debug = format!("{:?}", config);

        assert!(!debug.contains("hunter2"));
    }
}
