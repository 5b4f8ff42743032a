use super::print_json;
use crate::display::format_ticket_line;
use crate::error::{Result, TckError};
use crate::store::Store;
use crate::types::{TicketStatus, UNASSIGNED_OWNER};
use crate::utils::iso_now;

/// Edit a ticket's status and/or owner. Every edit refreshes `updatedAt`
/// and persists the full state.
pub fn cmd_set(
    id: &str,
    status: Option<TicketStatus>,
    owner: Option<&str>,
    output_json: bool,
) -> Result<()> {
    if status.is_none() && owner.is_none() {
        return Err(TckError::Other(
            "nothing to change (pass --status and/or --owner)".to_string(),
        ));
    }

    let mut store = Store::load();
    let mut ticket = store
        .find(id)
        .cloned()
        .ok_or_else(|| TckError::TicketNotFound(id.to_string()))?;

    if let Some(status) = status {
        ticket.status = status;
    }
    if let Some(owner) = owner {
        let owner = owner.trim();
        ticket.owner = if owner.is_empty() {
            UNASSIGNED_OWNER.to_string()
        } else {
            owner.to_string()
        };
    }
    ticket.updated_at = iso_now();

    store.upsert(ticket.clone());
    store.save()?;

    if output_json {
        print_json(&ticket)
    } else {
        println!("{}", format_ticket_line(&ticket));
        Ok(())
    }
}
