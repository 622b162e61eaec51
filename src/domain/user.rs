use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a board user (e.g., usr-1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            available: false,
        }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// First character of the display name, used for the avatar
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Finds the user a ticket's user reference points at
pub fn find_user<'a>(users: &'a [User], id: Option<&UserId>) -> Option<&'a User> {
    let id = id?;
    users.iter().find(|user| &user.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new(UserId::new("usr-1"), "Anoop Sharma".to_string()),
            User::new(UserId::new("usr-2"), "Yogesh".to_string()).with_availability(true),
        ]
    }

    #[test]
    fn test_user_initial() {
        let users = users();
        assert_eq!(users[0].initial(), Some('A'));

        let nameless = User::new(UserId::new("usr-9"), String::new());
        assert_eq!(nameless.initial(), None);
    }

    #[test]
    fn test_find_user() {
        let users = users();

        let found = find_user(&users, Some(&UserId::new("usr-2"))).unwrap();
        assert_eq!(found.name, "Yogesh");
        assert!(found.available);

        assert!(find_user(&users, Some(&UserId::new("usr-404"))).is_none());
        assert!(find_user(&users, None).is_none());
        assert!(find_user(&[], Some(&UserId::new("usr-1"))).is_none());
    }

    #[test]
    fn test_user_from_api_json() {
        let json = r#"{"id":"usr-3","name":"Shankar Kumar","available":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "usr-3");
        assert!(user.available);

        let json = r#"{"id":"usr-4","name":"Ramesh"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.available);
    }
}
