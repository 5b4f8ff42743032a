//! Sort keys and comparators for ticket listings.

use std::cmp::Ordering;

use jiff::Timestamp;

use crate::types::Ticket;

/// Sort key for ticket listings. The default (and the behavior for any
/// unrecognized configured key) is newest-updated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    UpdatedAsc,
    #[default]
    UpdatedDesc,
    PriorityAsc,
    PriorityDesc,
}

impl SortKey {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &[
        "updated_asc",
        "updated_desc",
        "priority_asc",
        "priority_desc",
    ];
}

enum_display_fromstr!(
    SortKey,
    crate::error::TckError::InvalidSortKey,
    {
        UpdatedAsc => "updated_asc",
        UpdatedDesc => "updated_desc",
        PriorityAsc => "priority_asc",
        PriorityDesc => "priority_desc",
    }
);

/// Compare by `updated_at` instant; timestamps that fail to parse fall
/// back to a lexicographic comparison so the order stays deterministic.
fn cmp_updated(a: &Ticket, b: &Ticket) -> Ordering {
    match (
        a.updated_at.parse::<Timestamp>(),
        b.updated_at.parse::<Timestamp>(),
    ) {
        (Ok(ta), Ok(tb)) => ta.cmp(&tb),
        _ => a.updated_at.cmp(&b.updated_at),
    }
}

/// Sort tickets by the given key. The sort is stable: equal keys keep
/// their input order.
pub fn sort_tickets_by(tickets: &mut [Ticket], key: SortKey) {
    match key {
        SortKey::UpdatedAsc => tickets.sort_by(cmp_updated),
        SortKey::UpdatedDesc => tickets.sort_by(|a, b| cmp_updated(b, a)),
        SortKey::PriorityAsc => tickets.sort_by_key(|t| t.priority.rank()),
        SortKey::PriorityDesc => tickets.sort_by_key(|t| std::cmp::Reverse(t.priority.rank())),
    }
}
