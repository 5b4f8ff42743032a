use serde::{Deserialize, Serialize};

/// Sentinel owner for tickets nobody has picked up yet.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// Visual severity class attached to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Human-readable label shown on badges and in the detail view.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Waiting => "Waiting",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Severity class: resolved reads as success, anything still moving as
    /// warning, untouched work as error, terminal states as inactive.
    pub fn severity(&self) -> Severity {
        match self {
            TicketStatus::Resolved => Severity::Success,
            TicketStatus::InProgress | TicketStatus::Waiting => Severity::Warning,
            TicketStatus::Open => Severity::Error,
            TicketStatus::Closed => Severity::Inactive,
        }
    }
}

enum_display_fromstr!(
    TicketStatus,
    crate::error::TckError::InvalidStatus,
    {
        Open => "open",
        InProgress => "in_progress",
        Waiting => "waiting",
        Resolved => "resolved",
        Closed => "closed",
    }
);

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "waiting", "resolved", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    P1,
    #[default]
    P2,
    P3,
    P4,
}

impl TicketPriority {
    /// Rank used for sorting: p1 outranks p2 outranks p3 outranks p4.
    pub fn rank(&self) -> u8 {
        match self {
            TicketPriority::P1 => 4,
            TicketPriority::P2 => 3,
            TicketPriority::P3 => 2,
            TicketPriority::P4 => 1,
        }
    }

    /// SLA text attached to newly created tickets.
    pub fn first_response_sla(&self) -> &'static str {
        match self {
            TicketPriority::P1 => "4h first response",
            _ => "8h first response",
        }
    }
}

enum_display_fromstr!(
    TicketPriority,
    crate::error::TckError::InvalidPriority,
    {
        P1 => "p1",
        P2 => "p2",
        P3 => "p3",
        P4 => "p4",
    }
);

pub const VALID_PRIORITIES: &[&str] = &["p1", "p2", "p3", "p4"];

/// A support-request record.
///
/// Serialized field names are camelCase to match the persisted state
/// document (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub customer: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
    pub sla: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}
