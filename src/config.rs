use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Dev => "blueprint_estimator=debug,tower_http=debug,info",
            Self::Staging => "blueprint_estimator=debug,tower_http=info,info",
            Self::Prod => "blueprint_estimator=info,tower_http=info,warn",
        }
    }

    /// Production ships JSON lines to the log collector
    pub fn uses_json_logs(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS ("*" or empty means any origin)
    pub cors_allow_origins: Vec<String>,

    // Static front-end assets
    pub static_dir: String,

    // Request body limit for JSON payloads
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Environment::Dev,
            server_addr: "0.0.0.0:5000".to_string(),
            cors_allow_origins: vec!["*".to_string()],
            static_dir: "public".to_string(),
            body_limit_bytes: 100 * 1024,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or(defaults.server_addr);

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.cors_allow_origins);

        // Static assets
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let body_limit_bytes = match env::var("BODY_LIMIT_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("BODY_LIMIT_BYTES must be a byte count, got '{raw}'"))?,
            Err(_) => defaults.body_limit_bytes,
        };

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            static_dir,
            body_limit_bytes,
        })
    }

    /// True when the CORS list is empty or contains the `*` wildcard
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.is_empty() || self.cors_allow_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_aliases() {
        assert_eq!(Environment::from_str("production"), Environment::Prod);
        assert_eq!(Environment::from_str("PROD"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything-else"), Environment::Dev);
    }

    #[test]
    fn test_log_policy_per_environment() {
        assert!(Environment::Dev
            .default_log_filter()
            .starts_with("blueprint_estimator=debug"));
        assert!(Environment::Prod.default_log_filter().ends_with(",warn"));
        assert!(Environment::Prod.uses_json_logs());
        assert!(!Environment::Staging.uses_json_logs());
    }

    #[test]
    fn test_defaults_match_original_service() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr, "0.0.0.0:5000");
        assert_eq!(settings.body_limit_bytes, 102_400);
        assert!(settings.allows_any_origin());
    }

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test ");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);

        let settings = Settings {
            cors_allow_origins: origins,
            ..Settings::default()
        };
        assert!(!settings.allows_any_origin());
    }
}
