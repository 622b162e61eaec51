use crate::domain::priority::Priority;
use crate::domain::user::UserId;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a ticket as issued by the board API (e.g., CAM-1)
///
/// Numeric ids on the wire are kept in their decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a ticket on the board
///
/// The wire form is the display string itself ("Todo", "In Progress", ...).
/// Anything outside these four values is rejected when the ticket is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TicketStatus {
    Todo,
    InProgress,
    Done,
    Canceled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Canceled => "Canceled",
        }
    }

    /// Glyph shown next to the ticket title
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Todo => "⭕",
            Self::InProgress => "🔄",
            Self::Done => "✅",
            Self::Canceled => "❌",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Todo" => Ok(Self::Todo),
            "In Progress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            "Canceled" => Ok(Self::Canceled),
            other => Err(BoardError::InvalidStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for TicketStatus {
    type Error = BoardError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ticket as delivered by the data provider
///
/// Tickets are read-only input: the board never creates or edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tag: Vec<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub status: TicketStatus,
    /// Raw priority as sent by the provider; see [`Ticket::priority`]
    #[serde(rename = "priority")]
    pub priority_value: i64,
}

impl Ticket {
    /// Creates a ticket with status Todo, no priority, no assignee and no tags
    pub fn new(id: TicketId, title: String) -> Self {
        Self {
            id,
            title,
            tag: Vec::new(),
            user_id: None,
            status: TicketStatus::Todo,
            priority_value: 0,
        }
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority_value = priority;
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    /// Resolves the raw priority against the priority table
    pub fn priority(&self) -> Result<Priority> {
        Priority::try_from(self.priority_value)
    }

    /// Tag text as displayed on a card
    pub fn tag_label(&self) -> String {
        self.tag.join(", ")
    }
}

/// Accepts `"tag": "Feature"` as well as `"tag": ["Feature", "Bug"]`
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::One(tag)) => vec![tag],
        Some(Tags::Many(tags)) => tags,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_creation() {
        let ticket = Ticket::new(TicketId::new("CAM-1"), "Test ticket".to_string());
        assert_eq!(ticket.id.as_str(), "CAM-1");
        assert_eq!(ticket.title, "Test ticket");
        assert_eq!(ticket.status, TicketStatus::Todo);
        assert_eq!(ticket.priority().unwrap(), Priority::NoPriority);
        assert!(ticket.user_id.is_none());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Todo".parse::<TicketStatus>().unwrap(), TicketStatus::Todo);
        assert_eq!(
            "In Progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!("Done".parse::<TicketStatus>().unwrap(), TicketStatus::Done);
        assert_eq!(
            "Canceled".parse::<TicketStatus>().unwrap(),
            TicketStatus::Canceled
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "Backlog".parse::<TicketStatus>().unwrap_err();
        assert!(matches!(err, BoardError::InvalidStatus(ref s) if s == "Backlog"));

        let json = r#"{"id":"CAM-1","title":"x","status":"Backlog","priority":1}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(TicketStatus::Todo.icon(), "⭕");
        assert_eq!(TicketStatus::InProgress.icon(), "🔄");
        assert_eq!(TicketStatus::Done.icon(), "✅");
        assert_eq!(TicketStatus::Canceled.icon(), "❌");
    }

    #[test]
    fn test_ticket_from_api_json() {
        let json = r#"{
            "id": "CAM-2",
            "title": "Add Multi-Language Support",
            "tag": ["Feature Request"],
            "userId": "usr-2",
            "status": "In Progress",
            "priority": 3
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id.as_str(), "CAM-2");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.user_id, Some(UserId::new("usr-2")));
        assert_eq!(ticket.tag_label(), "Feature Request");
        assert_eq!(ticket.priority().unwrap(), Priority::High);
    }

    #[test]
    fn test_ticket_tag_as_plain_string() {
        let json = r#"{"id":"CAM-3","title":"x","tag":"Bug","status":"Done","priority":0}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.tag, vec!["Bug".to_string()]);
    }

    #[test]
    fn test_ticket_null_user_and_missing_tag() {
        let json = r#"{"id":"CAM-4","title":"x","userId":null,"status":"Todo","priority":2}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.user_id.is_none());
        assert!(ticket.tag.is_empty());
    }

    #[test]
    fn test_out_of_range_priority_decodes_but_does_not_resolve() {
        let json = r#"{"id":"CAM-5","title":"x","status":"Todo","priority":7}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.priority_value, 7);
        assert!(matches!(
            ticket.priority(),
            Err(BoardError::InvalidPriority(7))
        ));
    }

    #[test]
    fn test_numeric_ticket_id() {
        let json = r#"{"id":1,"title":"B","status":"Todo","priority":2,"userId":null}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, TicketId::new("1"));

        let json = r#"{"id":1.5,"title":"B","status":"Todo","priority":2}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_status_serializes_to_display_string() {
        let ticket = Ticket::new(TicketId::new("CAM-6"), "x".to_string())
            .with_status(TicketStatus::InProgress);
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["status"], "In Progress");
        assert_eq!(value["priority"], 0);
    }
}
