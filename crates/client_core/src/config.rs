use std::{collections::HashMap, fmt, fs, path::Path, str::FromStr};

use anyhow::{bail, Context};
use shared::view::PageSize;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const SETTINGS_FILE: &str = "dashboard.toml";

/// How a created record gets its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// `users.len() + 1`; the placeholder service echoes the same id for every create.
    #[default]
    Sequential,
    Server,
}

impl FromStr for IdAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "server" => Ok(Self::Server),
            other => bail!("unknown id assignment '{other}'; expected 'sequential' or 'server'"),
        }
    }
}

impl fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Server => f.write_str("server"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub page_size: PageSize,
    pub id_assignment: IdAssignment,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            page_size: PageSize::default(),
            id_assignment: IdAssignment::default(),
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then the toml file, then environment overrides.
pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_url").and_then(toml::Value::as_str) {
                    apply_api_url(&mut settings, v);
                }
                if let Some(v) = file_cfg.get("page_size") {
                    let raw = match v {
                        toml::Value::Integer(n) => n.to_string(),
                        other => other.as_str().unwrap_or_default().to_string(),
                    };
                    apply_page_size(&mut settings, &raw);
                }
                if let Some(v) = file_cfg.get("id_assignment").and_then(toml::Value::as_str) {
                    apply_id_assignment(&mut settings, v);
                }
            }
            Err(err) => {
                tracing::warn!("ignoring malformed settings file '{}': {err}", file.display());
            }
        }
    }

    if let Some(v) = env("DASHBOARD_API_URL") {
        apply_api_url(&mut settings, &v);
    }
    if let Some(v) = env("APP__API_URL") {
        apply_api_url(&mut settings, &v);
    }
    if let Some(v) = env("APP__PAGE_SIZE") {
        apply_page_size(&mut settings, &v);
    }
    if let Some(v) = env("APP__ID_ASSIGNMENT") {
        apply_id_assignment(&mut settings, &v);
    }

    settings
}

fn apply_api_url(settings: &mut Settings, raw: &str) {
    match normalize_api_url(raw) {
        Ok(url) => settings.api_url = url,
        Err(err) => tracing::warn!("ignoring api url '{raw}': {err:#}"),
    }
}

fn apply_page_size(settings: &mut Settings, raw: &str) {
    match raw.parse::<PageSize>() {
        Ok(size) => settings.page_size = size,
        Err(err) => tracing::warn!("ignoring page size '{raw}': {err}"),
    }
}

fn apply_id_assignment(settings: &mut Settings, raw: &str) {
    match raw.parse::<IdAssignment>() {
        Ok(mode) => settings.id_assignment = mode,
        Err(err) => tracing::warn!("{err}"),
    }
}

pub fn normalize_api_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("api url is empty");
    }

    let parsed = Url::parse(trimmed).with_context(|| format!("invalid api url '{trimmed}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("api url must use http or https, got '{}'", parsed.scheme());
    }

    Ok(trimmed.to_string())
}
