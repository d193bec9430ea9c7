use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS length as props carry it: a bare number of pixels or any CSS
/// string (`"300px"`, `"50%"`, `"calc(100% - 20px)"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    /// Pixels
    Px(f64),
    /// Passed through to the stylesheet unchanged
    Css(String),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CssLength {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for CssLength {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for CssLength {
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}
