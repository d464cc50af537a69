use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::render::RenderConfig;
use crate::sections::ContentPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub page_service_url: String,
    pub site_url: String,
    pub home_slug: String,
    pub page_service_timeout: Duration,
    pub content_policy: ContentPolicy,
    pub animation_base_delay_ms: u64,
    pub animation_stagger_ms: u64,
    pub animation_duration_ms: u64,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let strict = flag_env("STRICT_SECTION_CONTENT", false)?;

        Ok(Config {
            page_service_url: require_env("PAGE_SERVICE_URL")?
                .trim_end_matches('/')
                .to_string(),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            home_slug: std::env::var("HOME_SLUG").unwrap_or_else(|_| "home".to_string()),
            page_service_timeout: Duration::from_secs(parse_env(
                "PAGE_SERVICE_TIMEOUT_SECS",
                10,
            )?),
            content_policy: if strict {
                ContentPolicy::Strict
            } else {
                ContentPolicy::Lenient
            },
            animation_base_delay_ms: parse_env("ANIMATION_BASE_DELAY_MS", 0)?,
            animation_stagger_ms: parse_env("ANIMATION_STAGGER_MS", 100)?,
            animation_duration_ms: parse_env("ANIMATION_DURATION_MS", 500)?,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Animation timing and fallback assets handed to the section renderer.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            base_delay_ms: self.animation_base_delay_ms,
            stagger_ms: self.animation_stagger_ms,
            duration_ms: self.animation_duration_ms,
            ..RenderConfig::default()
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Boolean switch as written in env vars and query strings.
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flag_env(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).ok_or_else(|| anyhow!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u64 = parse_env("SITE_TEST_UNSET_VARIABLE_XYZ", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_flag_spellings() {
        for raw in ["true", "TRUE", "1", "yes", " on "] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_flag_env_accepts_numeric_switch() {
        std::env::set_var("SITE_TEST_STRICT_FLAG_ONE", "1");
        assert!(flag_env("SITE_TEST_STRICT_FLAG_ONE", false).unwrap());
        std::env::set_var("SITE_TEST_STRICT_FLAG_BAD", "sometimes");
        assert!(flag_env("SITE_TEST_STRICT_FLAG_BAD", false).is_err());
        assert!(!flag_env("SITE_TEST_STRICT_FLAG_UNSET", false).unwrap());
    }

    #[test]
    fn test_render_config_carries_animation_timing() {
        let config = Config {
            page_service_url: "http://pages.local".to_string(),
            site_url: "https://example.com".to_string(),
            home_slug: "home".to_string(),
            page_service_timeout: Duration::from_secs(5),
            content_policy: ContentPolicy::Lenient,
            animation_base_delay_ms: 50,
            animation_stagger_ms: 120,
            animation_duration_ms: 400,
            static_dir: "static".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        };

        let render = config.render_config();
        assert_eq!(render.base_delay_ms, 50);
        assert_eq!(render.stagger_ms, 120);
        assert_eq!(render.duration_ms, 400);
        assert_eq!(render.default_grid_columns, 3);
    }
}
