//! # Quickboard Core
//!
//! Grouping, ordering and display settings for a kanban ticket board.
//!
//! Tickets and users come from a [`DataProvider`], display settings are kept
//! in a [`SettingsStore`], and [`compute_grouped_view`] turns the three into
//! labelled, ordered columns ready for a presentation layer.

pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::BoardConfig;
pub use domain::{
    board::{compute_grouped_view, Group, GroupedView},
    card::{BoardView, ColumnView, TicketCard},
    priority::Priority,
    settings::{DisplaySettings, GroupBy, OrderBy},
    ticket::{Ticket, TicketId, TicketStatus},
    user::{User, UserId},
};
pub use error::{BoardError, Result};
pub use provider::{BoardData, DataProvider};
pub use session::BoardSession;
pub use storage::SettingsStore;
