use crate::domain::settings::{DisplaySettings, GroupBy};
use crate::domain::sorting::sort_tickets;
use crate::domain::ticket::Ticket;
use crate::domain::user::{find_user, User};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Column label for tickets whose assignee cannot be resolved
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// A column of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

impl Group {
    pub fn new(label: String) -> Self {
        Self {
            label,
            tickets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Tickets partitioned into labelled columns
///
/// Columns keep the order in which their first ticket was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedView {
    groups: Vec<Group>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GroupedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a ticket to the column with the given label, creating it if needed
    pub fn push(&mut self, label: &str, ticket: Ticket) {
        let slot = match self.index.get(label) {
            Some(&slot) => slot,
            None => {
                self.groups.push(Group::new(label.to_string()));
                self.index.insert(label.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].tickets.push(ticket);
    }

    /// Gets the tickets of a column by label
    pub fn get(&self, label: &str) -> Option<&[Ticket]> {
        self.index
            .get(label)
            .map(|&slot| self.groups[slot].tickets.as_slice())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of tickets across all columns
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    fn sort_groups(&mut self, settings: &DisplaySettings) {
        for group in &mut self.groups {
            sort_tickets(&mut group.tickets, settings.order_by);
        }
    }
}

/// Derives the column label of a ticket under the given grouping
pub fn group_label(ticket: &Ticket, users: &[User], group_by: GroupBy) -> Result<String> {
    let label = match group_by {
        GroupBy::Status => ticket.status.as_str().to_string(),
        GroupBy::User => find_user(users, ticket.user_id.as_ref())
            .map(|user| user.name.clone())
            .unwrap_or_else(|| UNASSIGNED_LABEL.to_string()),
        GroupBy::Priority => ticket.priority()?.name().to_string(),
    };
    Ok(label)
}

/// Groups and orders tickets for display
///
/// Every ticket lands in exactly one column. A ticket with a priority outside
/// 0..=4 rejects the whole computation with `InvalidPriority`, whatever the
/// grouping, since every card shows the priority icon.
pub fn compute_grouped_view(
    tickets: &[Ticket],
    users: &[User],
    settings: &DisplaySettings,
) -> Result<GroupedView> {
    for ticket in tickets {
        ticket.priority()?;
    }

    let mut view = GroupedView::new();
    for ticket in tickets {
        let label = group_label(ticket, users, settings.group_by)?;
        view.push(&label, ticket.clone());
    }
    view.sort_groups(settings);

    debug!(
        group_by = %settings.group_by,
        order_by = %settings.order_by,
        groups = view.len(),
        tickets = view.ticket_count(),
        "computed grouped view"
    );
    Ok(view)
}
