use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every integration is optional: a missing key switches that feature to its fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    /// Sender address for notification emails. `None` disables delivery.
    pub email_from: Option<String>,
    pub aws_region: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_model: optional_env("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            email_from: optional_env("EMAIL_FROM"),
            aws_region: optional_env("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            supabase_url: optional_env("SUPABASE_URL"),
            supabase_key: optional_env("SUPABASE_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn persistence_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_key.is_some()
    }

    /// Host part of the persistence URL, for startup diagnostics.
    pub fn supabase_host(&self) -> &str {
        self.supabase_url
            .as_deref()
            .and_then(|url| url.split_once("//"))
            .and_then(|(_, rest)| rest.split('/').next())
            .unwrap_or("(none)")
    }
}

/// Reads a variable, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Shows the first and last four characters of a secret, for log lines.
pub fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "(empty)".to_string(),
        Some(s) if s.chars().count() <= 8 => "****".to_string(),
        Some(s) => {
            let chars: Vec<char> = s.chars().collect();
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        }
    }
}

#[cfg(test)]
impl Config {
    /// Offline configuration: no model, no mail, no persistence.
    pub fn offline() -> Self {
        Config {
            groq_api_key: None,
            groq_model: DEFAULT_MODEL.to_string(),
            email_from: None,
            aws_region: "us-east-1".to_string(),
            supabase_url: None,
            supabase_key: None,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(None), "(empty)");
        assert_eq!(mask_secret(Some("short")), "****");
        assert_eq!(mask_secret(Some("abcd1234wxyz")), "abcd...wxyz");
    }

    #[test]
    fn test_supabase_host() {
        let mut config = Config::offline();
        assert_eq!(config.supabase_host(), "(none)");
        config.supabase_url = Some("https://proj.supabase.co/rest/v1".to_string());
        assert_eq!(config.supabase_host(), "proj.supabase.co");
    }

    #[test]
    fn test_persistence_requires_url_and_key() {
        let mut config = Config::offline();
        config.supabase_url = Some("https://proj.supabase.co".to_string());
        assert!(!config.persistence_configured());
        config.supabase_key = Some("key".to_string());
        assert!(config.persistence_configured());
    }
}
