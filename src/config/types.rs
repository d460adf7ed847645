use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.jikan.moe/v4").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page requested for top lists (default: 1).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page for top lists (default: 25, the API maximum).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Absent means a hung request
    /// stays loading indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Controller behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ControllerConfig {
    /// How overlapping list requests are resolved.
    #[serde(default)]
    pub sequencing: SequencingPolicy,
}

/// Resolution of overlapping requests on one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SequencingPolicy {
    /// Every completion is applied in the order it arrives. A slow, older
    /// request can overwrite the result of a newer one.
    #[default]
    LastCompletion,
    /// Only the most recently issued request may write state; completions
    /// of superseded requests are dropped.
    LatestRequest,
}

impl std::fmt::Display for SequencingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequencingPolicy::LastCompletion => write!(f, "last_completion"),
            SequencingPolicy::LatestRequest => write!(f, "latest_request"),
        }
    }
}

fn default_base_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    25
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    format!("anidex/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            limit: default_limit(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}
