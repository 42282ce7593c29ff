use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub usage: UsageConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

/// Thresholds for rate-limit usage classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Fraction of the limit at which usage is reported as approaching
    pub warning_ratio: f64,
    pub default_request_limit: u64,
}

/// Connection settings for the external auth and document services.
///
/// Emulator use is decided here at bootstrap, never as a side effect of
/// loading a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub project_id: Option<String>,
    pub use_emulators: bool,
    pub auth_emulator_host: String,
    pub firestore_emulator_host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; `from_env` passes the process environment
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match var("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(var)
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        // Allow tests or deployments to override port via env
        if let Some(port) = var("WORDWISE_PORT")
            .or_else(|| var("PORT"))
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.api.port = port;
        }
        if let Some(v) = var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging =
                v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Some(v) = var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Usage overrides
        if let Some(v) = var("USAGE_WARNING_RATIO") {
            self.usage.warning_ratio = v
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite() && *r > 0.0 && *r <= 1.0)
                .unwrap_or(self.usage.warning_ratio);
        }
        if let Some(v) = var("USAGE_DEFAULT_REQUEST_LIMIT") {
            self.usage.default_request_limit =
                v.parse().unwrap_or(self.usage.default_request_limit);
        }

        // Firebase overrides
        if let Some(v) = var("FIREBASE_PROJECT_ID") {
            self.firebase.project_id = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = var("FIREBASE_USE_EMULATORS") {
            self.firebase.use_emulators = v.parse().unwrap_or(self.firebase.use_emulators);
        }
        if let Some(v) = var("FIREBASE_AUTH_EMULATOR_HOST") {
            self.firebase.auth_emulator_host = v;
        }
        if let Some(v) = var("FIREBASE_FIRESTORE_EMULATOR_HOST") {
            self.firebase.firestore_emulator_host = v;
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                port: 3000,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
            usage: UsageConfig {
                warning_ratio: 0.8,
                default_request_limit: 1000,
            },
            firebase: FirebaseConfig {
                project_id: None,
                use_emulators: true,
                auth_emulator_host: "127.0.0.1:9099".to_string(),
                firestore_emulator_host: "127.0.0.1:8080".to_string(),
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                port: 3000,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.wordwise.ai".to_string()],
            },
            usage: UsageConfig {
                warning_ratio: 0.8,
                default_request_limit: 100,
            },
            firebase: FirebaseConfig {
                project_id: None,
                use_emulators: false,
                auth_emulator_host: String::new(),
                firestore_emulator_host: String::new(),
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                port: 3000,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://wordwise.ai".to_string()],
            },
            usage: UsageConfig {
                warning_ratio: 0.9,
                default_request_limit: 60,
            },
            firebase: FirebaseConfig {
                project_id: None,
                use_emulators: false,
                auth_emulator_host: String::new(),
                firestore_emulator_host: String::new(),
            },
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }

    /// Filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.api.enable_request_logging {
            "info,tower_http=debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert!(config.is_development());
        assert!(config.firebase.use_emulators);
        assert_eq!(config.default_log_filter(), "info,tower_http=debug");
        assert_eq!(config.usage.warning_ratio, 0.8);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.is_development());
        assert!(!config.firebase.use_emulators);
        assert_eq!(config.default_log_filter(), "info");
        assert_eq!(config.usage.default_request_limit, 60);
    }

    #[test]
    fn test_environment_serializes_lowercase() {
        let value = serde_json::to_value(Environment::Staging).unwrap();
        assert_eq!(value, serde_json::json!("staging"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_environment_preset() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("PORT", "8081"),
            ("SECURITY_ENABLE_CORS", "false"),
            ("SECURITY_CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("USAGE_DEFAULT_REQUEST_LIMIT", "250"),
            ("USAGE_WARNING_RATIO", "0.5"),
            ("FIREBASE_PROJECT_ID", "wordwise-prod"),
        ]));

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.api.port, 8081);
        assert!(!config.security.enable_cors);
        assert_eq!(config.security.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.usage.default_request_limit, 250);
        assert_eq!(config.usage.warning_ratio, 0.5);
        assert_eq!(config.firebase.project_id.as_deref(), Some("wordwise-prod"));
    }

    #[test]
    fn test_invalid_overrides_keep_preset_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("WORDWISE_PORT", "not-a-port"),
            ("USAGE_WARNING_RATIO", "1.5"),
            ("USAGE_DEFAULT_REQUEST_LIMIT", "-3"),
            ("FIREBASE_USE_EMULATORS", "maybe"),
        ]));

        assert!(config.is_development());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.usage.warning_ratio, 0.8);
        assert_eq!(config.usage.default_request_limit, 1000);
        assert!(config.firebase.use_emulators);
    }

    #[test]
    fn test_wordwise_port_wins_over_port() {
        let config = AppConfig::from_lookup(lookup(&[("WORDWISE_PORT", "4000"), ("PORT", "5000")]));
        assert_eq!(config.api.port, 4000);
    }
}
