//! Display preference profiles.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour assignment for the semantic roles every view draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
    pub emphasis: &'static str,
}

const LIGHT: Palette = Palette {
    text: "#3F4739",
    surface: "#BACBA9",
    accent: "#92AD94",
    emphasis: "#E1F4CB",
};

const DARK: Palette = Palette {
    text: "#ffffff",
    surface: "#333333",
    accent: "#515052",
    emphasis: "#6a6a6a",
};

/// One of the two named presentation profiles.
///
/// 两种命名的显示方案之一，默认深色。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayProfile {
    Light,
    #[default]
    Dark,
}

impl DisplayProfile {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for DisplayProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown display profile: {other}")),
        }
    }
}
