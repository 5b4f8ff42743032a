use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::print_json;
use crate::config::Config;
use crate::display::{format_datetime, format_status_badge};
use crate::error::Result;
use crate::query::{SortKey, TicketQuery, filter_and_sort};
use crate::store::Store;
use crate::types::{Ticket, TicketPriority, TicketStatus};

/// A row in the ticket listing table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Prio")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

fn ticket_row(ticket: &Ticket, selected: bool) -> TicketRow {
    TicketRow {
        marker: if selected { ">" } else { "" }.to_string(),
        id: ticket.id.clone(),
        title: ticket.title.clone(),
        customer: ticket.customer.clone(),
        priority: ticket.priority.to_string().to_uppercase(),
        status: format_status_badge(ticket.status),
        owner: ticket.owner.clone(),
        updated: format_datetime(&ticket.updated_at),
    }
}

/// List tickets matching the given filters, sorted by the given key.
pub fn cmd_ls(
    text: Option<&str>,
    status: Option<TicketStatus>,
    priority: Option<TicketPriority>,
    sort: Option<SortKey>,
    output_json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let store = Store::load();

    let query = TicketQuery {
        text: text.unwrap_or_default().to_string(),
        status,
        priority,
        sort: sort.unwrap_or_else(|| config.default_sort_key()),
    };
    let matched = filter_and_sort(&store.tickets, &query);

    if output_json {
        return print_json(&matched);
    }

    println!("{}", format!("{} matching", matched.len()).dimmed());
    if matched.is_empty() {
        return Ok(());
    }

    let rows: Vec<TicketRow> = matched
        .iter()
        .map(|t| ticket_row(t, store.selected_id.as_deref() == Some(t.id.as_str())))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    Ok(())
}
