use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend endpoints. The only two knobs the client has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the shop REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL prefixed onto product image paths.
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8081/api".to_string()
}

fn default_cdn_url() -> String {
    "http://127.0.0.1:8081/content".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cdn_url: default_cdn_url(),
        }
    }
}
