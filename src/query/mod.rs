//! Filtering and sorting over the ticket collection.
//!
//! A query is three conjunctive predicates (free text, status, priority)
//! followed by a stable sort. An absent filter matches everything; the
//! free-text predicate is a case-insensitive substring match ORed across
//! id, title, customer, and owner.

pub mod sort;

pub use sort::{SortKey, sort_tickets_by};

use crate::types::{Ticket, TicketPriority, TicketStatus};

#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    pub text: String,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub sort: SortKey,
}

/// Apply a query to a ticket collection. Operates on a copy; the input
/// order is the tiebreak order for equal sort keys.
pub fn filter_and_sort(tickets: &[Ticket], query: &TicketQuery) -> Vec<Ticket> {
    let needle = query.text.trim().to_lowercase();

    let mut matched: Vec<Ticket> = tickets
        .iter()
        .filter(|t| matches_text(t, &needle))
        .filter(|t| query.status.is_none_or(|s| t.status == s))
        .filter(|t| query.priority.is_none_or(|p| t.priority == p))
        .cloned()
        .collect();

    sort_tickets_by(&mut matched, query.sort);
    matched
}

fn matches_text(ticket: &Ticket, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &ticket.id,
        &ticket.title,
        &ticket.customer,
        &ticket.owner,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
