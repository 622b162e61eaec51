use crate::domain::settings::OrderBy;
use crate::domain::ticket::Ticket;
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Sorts the tickets of one column in-place
///
/// The sort is stable: tickets comparing equal keep their input order.
///
/// # Examples
/// ```
/// use quickboard_core::domain::settings::OrderBy;
/// use quickboard_core::domain::sorting::sort_tickets;
/// use quickboard_core::domain::ticket::{Ticket, TicketId};
///
/// let mut tickets = vec![
///     Ticket::new(TicketId::new("CAM-1"), "Low".to_string()).with_priority(1),
///     Ticket::new(TicketId::new("CAM-2"), "Urgent".to_string()).with_priority(4),
/// ];
///
/// sort_tickets(&mut tickets, OrderBy::Priority);
/// assert_eq!(tickets[0].id.as_str(), "CAM-2");
/// ```
pub fn sort_tickets(tickets: &mut [Ticket], order_by: OrderBy) {
    tickets.sort_by(|a, b| match order_by {
        OrderBy::Priority => b.priority_value.cmp(&a.priority_value),
        OrderBy::Title => compare_titles(&a.title, &b.title),
    });
}

/// Compare titles the way a locale collation would for plain text
///
/// Base letters decide first, ignoring accents and case. Then unaccented
/// sorts before accented, and lowercase before uppercase.
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| {
            let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
            a_lower.nfc().cmp(b_lower.nfc())
        })
        .then_with(|| b.cmp(a))
}

/// Lowercased title with diacritics stripped
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
