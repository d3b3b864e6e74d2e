use std::path::PathBuf;

const APP_DIR_NAME: &str = "catalog-viewer";

/// Honour `CV_PROFILE` so parallel profiles keep separate directories.
fn resolved_app_dir_name() -> String {
    match std::env::var("CV_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: Option<PathBuf>,
    pub logs_dir: Option<PathBuf>,
}

impl AppPaths {
    /// Resolve locations from the platform directories.
    pub fn resolve() -> Self {
        let name = resolved_app_dir_name();
        Self::from_bases(dirs::config_dir(), dirs::data_local_dir(), &name)
    }

    fn from_bases(config_base: Option<PathBuf>, data_base: Option<PathBuf>, name: &str) -> Self {
        Self {
            config_path: config_base.map(|base| base.join(name).join("config.toml")),
            logs_dir: data_base.map(|base| base.join(name).join("logs")),
        }
    }
}
