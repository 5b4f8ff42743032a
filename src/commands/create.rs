use super::print_json;
use crate::error::Result;
use crate::store::Store;
use crate::types::{Ticket, TicketPriority, TicketStatus, UNASSIGNED_OWNER};
use crate::utils::iso_now;

/// Options for creating a new ticket
pub struct CreateOptions {
    pub title: String,
    pub customer: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub description: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        CreateOptions {
            title: "Untitled".to_string(),
            customer: String::new(),
            priority: TicketPriority::P2,
            status: TicketStatus::Open,
            description: None,
        }
    }
}

/// Create a new ticket, select it, and print its id.
///
/// The id comes from the store's numeric sequence, the owner starts as
/// the unassigned sentinel, and the SLA text is derived from priority.
pub fn cmd_create(options: CreateOptions, output_json: bool) -> Result<()> {
    let mut store = Store::load();

    let id = store.next_id();
    let now = iso_now();

    let ticket = Ticket {
        id: id.clone(),
        title: options.title.trim().to_string(),
        customer: options.customer.trim().to_string(),
        priority: options.priority,
        status: options.status,
        owner: UNASSIGNED_OWNER.to_string(),
        created_at: now.clone(),
        updated_at: now,
        sla: options.priority.first_response_sla().to_string(),
        tags: Vec::new(),
        description: options
            .description
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
    };

    store.upsert(ticket.clone());
    store.select(Some(id.clone()));
    store.save()?;

    if output_json {
        print_json(&ticket)
    } else {
        println!("{id}");
        Ok(())
    }
}
