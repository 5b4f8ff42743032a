use clipboard_rs::{Clipboard, ClipboardContext};

use super::NO_SELECTION_HINT;
use crate::config::Config;
use crate::error::{Result, TckError};
use crate::link::ticket_link;
use crate::store::Store;

/// Copy the shareable link for a ticket to the system clipboard.
///
/// Clipboard access is fire-and-forget: when it fails, the link is
/// printed instead so it can be copied manually. No retry.
pub fn cmd_copy_link(id: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let store = Store::load();

    let ticket = match id {
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

    let link = ticket_link(&config.board_url, &ticket.id)?;

    match ClipboardContext::new().and_then(|ctx| ctx.set_text(link.clone())) {
        Ok(()) => println!("copied"),
        Err(e) => {
            tracing::warn!("clipboard write failed: {e}");
            println!("{link}");
        }
    }

    Ok(())
}
