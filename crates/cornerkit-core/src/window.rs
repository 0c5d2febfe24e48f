//! Window identity within the host shell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The label of one window owned by the host shell.
///
/// The shell addresses windows by string label; CornerKit never holds a
/// native window handle itself. Every outbound command carries the label of
/// the window it applies to, so two sessions managing two windows cannot
/// interfere with each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowLabel(String);

impl WindowLabel {
    /// Creates a label from anything string-like.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowLabel {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for WindowLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}
