//! Fixed seed tickets used when no valid persisted state exists.

use jiff::{Span, Timestamp, ToSpan};

use crate::types::{Ticket, TicketPriority, TicketStatus};

fn ago(span: Span) -> String {
    let now = Timestamp::now();
    now.checked_sub(span).unwrap_or(now).to_string()
}

fn minutes_ago(m: i64) -> String {
    ago(m.minutes())
}

fn hours_ago(h: i64) -> String {
    ago(h.hours())
}

// Timestamp arithmetic is restricted to clock units, so a day is 24 hours.
fn days_ago(d: i64) -> String {
    hours_ago(d * 24)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The five default tickets, timestamped relative to seed time.
pub fn default_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TCK-1042".to_string(),
            title: "Login fails after password reset".to_string(),
            customer: "Meyer GmbH".to_string(),
            priority: TicketPriority::P1,
            status: TicketStatus::Open,
            owner: "Support L1".to_string(),
            created_at: days_ago(1),
            updated_at: minutes_ago(18),
            sla: "4h first response".to_string(),
            tags: tags(&["auth", "prod"]),
            description: "Several users still get \"invalid credentials\" after a password \
                          reset. Please check the auth logs."
                .to_string(),
        },
        Ticket {
            id: "TCK-1041".to_string(),
            title: "Invoice PDF is generated empty".to_string(),
            customer: "Nordlicht AG".to_string(),
            priority: TicketPriority::P2,
            status: TicketStatus::InProgress,
            owner: "Backoffice".to_string(),
            created_at: days_ago(2),
            updated_at: hours_ago(2),
            sla: "8h first response".to_string(),
            tags: tags(&["billing"]),
            description: "Exporting invoices as PDF produces a file without content. Affects \
                          several invoice ids."
                .to_string(),
        },
        Ticket {
            id: "TCK-1039".to_string(),
            title: "Feature request: extra column in CSV export".to_string(),
            customer: "Kaufmann KG".to_string(),
            priority: TicketPriority::P4,
            status: TicketStatus::Waiting,
            owner: "Product".to_string(),
            created_at: days_ago(6),
            updated_at: days_ago(1),
            sla: "—".to_string(),
            tags: tags(&["feature", "export"]),
            description: "Customer wants an additional \"cost center\" column in the CSV \
                          export."
                .to_string(),
        },
        Ticket {
            id: "TCK-1035".to_string(),
            title: "Sporadically high response times in the UI".to_string(),
            customer: "Stadtwerke Sued".to_string(),
            priority: TicketPriority::P2,
            status: TicketStatus::Resolved,
            owner: "SRE".to_string(),
            created_at: days_ago(9),
            updated_at: days_ago(2),
            sla: "8h first response".to_string(),
            tags: tags(&["performance"]),
            description: "Monitoring shows peaks in API latency. Stable after cache tuning."
                .to_string(),
        },
        Ticket {
            id: "TCK-1028".to_string(),
            title: "Close account".to_string(),
            customer: "Example customer".to_string(),
            priority: TicketPriority::P3,
            status: TicketStatus::Closed,
            owner: "Support L1".to_string(),
            created_at: days_ago(21),
            updated_at: days_ago(14),
            sla: "—".to_string(),
            tags: tags(&["account"]),
            description: "Customer asks to close their account, including a data export."
                .to_string(),
        },
    ]
}
