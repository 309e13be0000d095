use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    let defaults = SiteProfile::default();
    Config {
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:8080"),
        search_api_url: get_env_or_default("SEARCH_API_URL", "http://127.0.0.1:8000"),
        static_dir: get_env_or_default("STATIC_DIR", "static"),
        search_timeout: Duration::from_secs(get_env_parsed("SEARCH_TIMEOUT_SECS", 10)),
        profile: SiteProfile {
            owner: get_env_or_default("SITE_OWNER", &defaults.owner),
            linkedin_url: get_env_or_default("LINKEDIN_URL", &defaults.linkedin_url),
            github_url: get_env_or_default("GITHUB_URL", &defaults.github_url),
        },
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Base URL of the external search service; `/api/search` is appended.
    pub search_api_url: String,
    pub static_dir: String,
    pub search_timeout: Duration,
    pub profile: SiteProfile,
}

/// Who the site belongs to. Shown in the header of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub owner: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            owner: "Rhamsez Thevenin".to_string(),
            linkedin_url: "https://linkedin.com/in/rhamzthev".to_string(),
            github_url: "https://github.com/rhamzthev".to_string(),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {key}={raw:?}, using {default}");
            default
        }),
        Err(_) => default,
    }
}
