//! Rendering helpers: status badges, date formatting, single-line ticket
//! output. Stateless projections of store data.

use owo_colors::OwoColorize;

use crate::types::{Severity, Ticket, TicketStatus};

/// Placeholder for empty display fields.
pub const EMPTY_FIELD: &str = "—";

/// Format a status as a colored `[Label]` badge.
pub fn format_status_badge(status: TicketStatus) -> String {
    let badge = format!("[{}]", status.label());
    match status.severity() {
        Severity::Success => badge.green().to_string(),
        Severity::Warning => badge.yellow().to_string(),
        Severity::Error => badge.red().to_string(),
        Severity::Inactive => badge.dimmed().to_string(),
    }
}

/// Render an ISO-8601 timestamp as `DD.MM.YYYY HH:MM` in local time.
/// Unparseable input is shown as-is.
pub fn format_datetime(iso: &str) -> String {
    match iso.parse::<jiff::Timestamp>() {
        Ok(ts) => {
            let zoned = ts.to_zoned(jiff::tz::TimeZone::system());
            format!(
                "{:02}.{:02}.{} {:02}:{:02}",
                zoned.day(),
                zoned.month(),
                zoned.year(),
                zoned.hour(),
                zoned.minute()
            )
        }
        Err(_) => iso.to_string(),
    }
}

/// Join tags for display, falling back to the em dash placeholder.
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        tags.join(", ")
    }
}

/// A free-form field, or the em dash placeholder when empty.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

/// Format a ticket for single-line display.
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{} {} {} - {}",
        ticket.id.cyan(),
        format!("[{}]", ticket.priority.to_string().to_uppercase()),
        format_status_badge(ticket.status),
        ticket.title
    )
}
