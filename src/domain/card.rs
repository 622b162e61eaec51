use crate::domain::board::GroupedView;
use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{find_user, User};
use crate::error::Result;
use serde::Serialize;

/// Everything a ticket card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCard {
    pub id: TicketId,
    /// Avatar letter; absent when the assignee cannot be resolved
    pub assignee_initial: Option<char>,
    pub assignee_available: bool,
    pub status_icon: &'static str,
    pub title: String,
    pub priority_icon: &'static str,
    pub tag: String,
}

impl TicketCard {
    pub fn build(ticket: &Ticket, users: &[User]) -> Result<Self> {
        let assignee = find_user(users, ticket.user_id.as_ref());
        Ok(Self {
            id: ticket.id.clone(),
            assignee_initial: assignee.and_then(User::initial),
            assignee_available: assignee.map(|u| u.available).unwrap_or(false),
            status_icon: ticket.status.icon(),
            title: ticket.title.clone(),
            priority_icon: ticket.priority()?.icon(),
            tag: ticket.tag_label(),
        })
    }
}

/// A rendered column: its label, ticket count and cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub label: String,
    pub count: usize,
    pub cards: Vec<TicketCard>,
}

/// The whole board, ready to draw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn build(view: &GroupedView, users: &[User]) -> Result<Self> {
        let columns = view
            .groups()
            .iter()
            .map(|group| {
                let cards = group
                    .tickets
                    .iter()
                    .map(|ticket| TicketCard::build(ticket, users))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ColumnView {
                    label: group.label.clone(),
                    count: cards.len(),
                    cards,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns })
    }
}
