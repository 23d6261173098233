use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}
