use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::warn;

/// What tickets are grouped into columns by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

/// How tickets are ordered inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Priority,
    Title,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }
}

impl FromStr for GroupBy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "user" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            _ => Err(BoardError::InvalidGroupBy(s.to_string())),
        }
    }
}

impl FromStr for OrderBy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(BoardError::InvalidOrderBy(s.to_string())),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-selected grouping and ordering of the board
///
/// Persisted as `{"groupBy":"status","orderBy":"priority"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub group_by: GroupBy,
    pub order_by: OrderBy,
}

impl DisplaySettings {
    pub fn new(group_by: GroupBy, order_by: OrderBy) -> Self {
        Self { group_by, order_by }
    }

    /// Returns a copy with a different grouping
    pub fn with_group_by(self, group_by: GroupBy) -> Self {
        Self { group_by, ..self }
    }

    /// Returns a copy with a different ordering
    pub fn with_order_by(self, order_by: OrderBy) -> Self {
        Self { order_by, ..self }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Strict parse of the persisted form
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        serde_json::from_str(raw).map_err(|e| BoardError::MalformedSettings(e.to_string()))
    }

    /// Restores persisted settings, falling back to the default when the
    /// value is absent or cannot be parsed
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "discarding persisted display settings");
                Self::default()
            }
        }
    }
}
