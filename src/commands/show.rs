use owo_colors::OwoColorize;

use super::{NO_SELECTION_HINT, print_json};
use crate::display::{format_datetime, format_status_badge, format_tags, or_placeholder};
use crate::error::{Result, TckError};
use crate::store::Store;
use crate::types::Ticket;

/// Display a ticket in full: the detail view of the given id, or of the
/// current selection when no id is passed.
pub fn cmd_show(id: Option<&str>, output_json: bool) -> Result<()> {
    let store = Store::load();

    let ticket: &Ticket = match id {
        Some(id) => store
            .find(id)
            .ok_or_else(|| TckError::TicketNotFound(id.to_string()))?,
        None => match store.selected() {
            Some(ticket) => ticket,
            None => {
                println!("{NO_SELECTION_HINT}");
                return Ok(());
            }
        },
    };

    if output_json {
        return print_json(ticket);
    }

    println!("{}", format!("{}: {}", ticket.id, ticket.title).bold());
    println!(
        "{} {}",
        format_status_badge(ticket.status),
        format!("[{}]", ticket.priority.to_string().to_uppercase())
    );
    println!();
    println!("  Owner:     {}", ticket.owner);
    println!("  Customer:  {}", ticket.customer);
    println!("  Created:   {}", format_datetime(&ticket.created_at));
    println!("  Updated:   {}", format_datetime(&ticket.updated_at));
    println!("  SLA:       {}", or_placeholder(&ticket.sla));
    println!("  Tags:      {}", format_tags(&ticket.tags));
    println!();

    for line in or_placeholder(&ticket.description).lines() {
        println!("  {line}");
    }

    Ok(())
}
