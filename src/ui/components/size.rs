//! Size scale shared by buttons and inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Component size.
///
/// Names outside the scale are kept verbatim in [`Size::Other`] so they still
/// reach the class name (`krado-button--xl`); validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    /// Small.
    Sm,
    /// Medium (default).
    #[default]
    Md,
    /// Large.
    Lg,
    /// A name outside the scale.
    Other(String),
}

impl Size {
    /// The documented sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Class suffix for this size.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the documented sizes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether this is the default size, which adds no modifier class.
    pub fn is_default(&self) -> bool {
        *self == Self::Md
    }
}

impl From<&str> for Size {
    fn from(name: &str) -> Self {
        match name {
            "sm" => Self::Sm,
            "md" => Self::Md,
            "lg" => Self::Lg,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Size {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        match size {
            Size::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
