pub mod board;
pub mod card;
pub mod priority;
pub mod settings;
pub mod sorting;
pub mod ticket;
pub mod user;

pub use board::{compute_grouped_view, Group, GroupedView, UNASSIGNED_LABEL};
pub use card::{BoardView, ColumnView, TicketCard};
pub use priority::Priority;
pub use settings::{DisplaySettings, GroupBy, OrderBy};
pub use sorting::sort_tickets;
pub use ticket::{Ticket, TicketId, TicketStatus};
pub use user::{User, UserId};
