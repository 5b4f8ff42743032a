#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod link;
pub mod paths;
pub mod query;
pub mod store;
pub mod types;
pub mod utils;

pub use error::{Result, TckError};
pub use query::{SortKey, TicketQuery, filter_and_sort, sort_tickets_by};
pub use store::Store;
pub use types::{
    Severity, Ticket, TicketPriority, TicketStatus, UNASSIGNED_OWNER, VALID_PRIORITIES,
    VALID_STATUSES,
};
