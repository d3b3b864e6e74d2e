//! # Configuration DTO / 配置数据结构
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Missing keys fall back to the built-in defaults below. Reading the file
//! from disk is the bootstrap layer's job.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::display::DisplayProfile;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_RESOURCE: &str = "pokemon";
pub const DEFAULT_PAGE_SIZE: usize = 9;
/// Upper bound accepted for `list.page_size`.
pub const MAX_PAGE_SIZE: usize = 100;

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Collection path listing entries, e.g. `pokemon`.
    pub resource: String,
    /// Unset means requests may wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_profile: DisplayProfile,
}

/// Application configuration
/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.page_size, 9);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.display.default_profile, DisplayProfile::Dark);
        assert!(config.api.request_timeout().is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            request_timeout_secs = 5

            [display]
            default_profile = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.resource, DEFAULT_RESOURCE);
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.display.default_profile, DisplayProfile::Light);
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [display]
            default_profile = "sepia"
            "#,
        );
        assert!(result.is_err());
    }
}
