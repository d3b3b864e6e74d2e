//! # Configuration Loader / 配置加载器
//!
//! Reads the optional TOML file and maps it into [`AppConfig`]. Missing keys
//! fall back to the defaults declared on the DTO; nothing is validated here.
//!
//! 读取可选的 TOML 配置文件。缺失的键使用 DTO 上的默认值。

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use cv_core::config::MAX_PAGE_SIZE;
use cv_core::AppConfig;
use tracing::{debug, info};

use super::app_paths::AppPaths;

pub const CONFIG_ENV: &str = "CV_CONFIG";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or through `CV_CONFIG`; it must exist.
    Explicit(PathBuf),
    /// The per-user default location; absence means built-in defaults.
    Default(PathBuf),
    /// No candidate path at all.
    BuiltIn,
}

impl ConfigSource {
    /// Pick the config location: CLI flag, then `CV_CONFIG`, then the
    /// platform config directory.
    pub fn locate(cli_path: Option<PathBuf>, env_path: Option<String>, paths: &AppPaths) -> Self {
        if let Some(path) = cli_path {
            return Self::Explicit(path);
        }
        if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
            return Self::Explicit(PathBuf::from(path));
        }
        match &paths.config_path {
            Some(path) => Self::Default(path.clone()),
            None => Self::BuiltIn,
        }
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Resolve and load the effective configuration.
///
/// A missing default file yields [`AppConfig::default`]; a missing explicit
/// file is an error.
pub fn resolve_config(cli_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let source = ConfigSource::locate(
        cli_path,
        std::env::var(CONFIG_ENV).ok(),
        &AppPaths::resolve(),
    );
    load_from_source(&source)
}

/// Load from `source` and reject values the stores cannot page with.
pub fn load_from_source(source: &ConfigSource) -> anyhow::Result<AppConfig> {
    let config = read_source(source)?;
    check_list_config(&config).with_context(|| format!("Invalid configuration from {source:?}"))?;
    Ok(config)
}

/// `page_size` must lie in `1..=MAX_PAGE_SIZE`.
pub fn check_list_config(config: &AppConfig) -> anyhow::Result<()> {
    let page_size = config.list.page_size;
    ensure!(page_size > 0, "list.page_size must be at least 1");
    ensure!(
        page_size <= MAX_PAGE_SIZE,
        "list.page_size must be at most {MAX_PAGE_SIZE}, got {page_size}"
    );
    Ok(())
}

fn read_source(source: &ConfigSource) -> anyhow::Result<AppConfig> {
    match source {
        ConfigSource::Explicit(path) => {
            info!(path = %path.display(), "Loading configuration");
            load_config(path.clone())
        }
        ConfigSource::Default(path) if file_exists(path) => {
            info!(path = %path.display(), "Loading configuration");
            load_config(path.clone())
        }
        ConfigSource::Default(path) => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(AppConfig::default())
        }
        ConfigSource::BuiltIn => Ok(AppConfig::default()),
    }
}

fn file_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::DisplayProfile;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn paths_with(config_path: Option<PathBuf>) -> AppPaths {
        AppPaths {
            config_path,
            logs_dir: None,
        }
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "http://localhost:9000/api"
            resource = "creatures"
            request_timeout_secs = 3

            [list]
            page_size = 20

            [display]
            default_profile = "light"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.resource, "creatures");
        assert_eq!(config.api.request_timeout_secs, Some(3));
        assert_eq!(config.list.page_size, 20);
        assert_eq!(config.display.default_profile, DisplayProfile::Light);
    }

    /// Test that missing sections fall back to defaults
    /// 测试缺失的部分使用默认值
    #[test]
    fn test_load_config_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[list]\npage_size = 12\n").unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.list.page_size, 12);
        assert_eq!(config.api, AppConfig::default().api);
        assert_eq!(config.display.default_profile, DisplayProfile::Dark);
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[list\npage_size = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_locate_prefers_cli_then_env_then_default() {
        let paths = paths_with(Some(PathBuf::from("/cfg/catalog-viewer/config.toml")));

        assert_eq!(
            ConfigSource::locate(Some("/a.toml".into()), Some("/b.toml".into()), &paths),
            ConfigSource::Explicit(PathBuf::from("/a.toml"))
        );
        assert_eq!(
            ConfigSource::locate(None, Some("/b.toml".into()), &paths),
            ConfigSource::Explicit(PathBuf::from("/b.toml"))
        );
        assert_eq!(
            ConfigSource::locate(None, Some("  ".into()), &paths),
            ConfigSource::Default(PathBuf::from("/cfg/catalog-viewer/config.toml"))
        );
        assert_eq!(
            ConfigSource::locate(None, None, &paths_with(None)),
            ConfigSource::BuiltIn
        );
    }

    #[test]
    fn test_missing_default_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Default(dir.path().join("config.toml"));

        let config = load_from_source(&source).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    fn explicit_source_with(content: &str) -> (NamedTempFile, ConfigSource) {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        let source = ConfigSource::Explicit(temp_file.path().to_path_buf());
        (temp_file, source)
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let (_file, source) = explicit_source_with("[list]\npage_size = 0\n");

        let err = load_from_source(&source).unwrap_err();
        assert!(format!("{err:#}").contains("list.page_size must be at least 1"));
    }

    #[test]
    fn test_oversized_page_size_is_rejected() {
        let (_file, source) = explicit_source_with("[list]\npage_size = 9223372036854775807\n");

        let err = load_from_source(&source).unwrap_err();
        assert!(format!("{err:#}").contains("list.page_size must be at most 100"));
    }

    #[test]
    fn test_page_size_bounds_are_inclusive() {
        for page_size in [1, MAX_PAGE_SIZE] {
            let (_file, source) = explicit_source_with(&format!("[list]\npage_size = {page_size}\n"));
            assert_eq!(load_from_source(&source).unwrap().list.page_size, page_size);
        }
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Explicit(dir.path().join("config.toml"));

        assert!(load_from_source(&source).is_err());
    }
}
