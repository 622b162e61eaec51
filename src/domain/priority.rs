use crate::error::BoardError;
use std::fmt;

/// Ticket priority, from 0 ("No priority") up to 4 ("Urgent")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    NoPriority = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::NoPriority,
    ];

    /// Display name used as the column label when grouping by priority
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoPriority => "No priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Glyph shown on a ticket card
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NoPriority => "❓",
            Self::Low => "⏬",
            Self::Medium => "🎯",
            Self::High => "⚡",
            Self::Urgent => "🔴",
        }
    }

    pub fn value(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<i64> for Priority {
    type Error = BoardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoPriority),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            other => Err(BoardError::InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
