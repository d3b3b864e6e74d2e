use std::fmt;
use std::str::FromStr;

use cv_core::EntryId;
use thiserror::Error;

const DETAIL_PREFIX: &str = "/item/";

/// Navigation targets. Paths are `/` and `/item/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no view for path `{0}`")]
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path.trim();
        if path == "/" {
            return Ok(Self::List);
        }

        let id = path
            .strip_prefix(DETAIL_PREFIX)
            .map(|rest| rest.strip_suffix('/').unwrap_or(rest))
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        Ok(Self::Detail(EntryId::from(id)))
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Detail(id) => format!("{DETAIL_PREFIX}{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
