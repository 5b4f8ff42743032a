use crate::display::format_ticket_line;
use crate::error::Result;
use crate::link::parse_ticket_link;
use crate::store::Store;

/// Follow a shareable link: extract the ticket id from the fragment and
/// make it the selection when it exists in the store. An unknown id
/// leaves the selection unchanged; re-applying the same link is a no-op.
pub fn cmd_open(link: &str) -> Result<()> {
    let id = parse_ticket_link(link)?;

    let mut store = Store::load();
    let Some(ticket) = store.find(&id).cloned() else {
        println!("ticket '{id}' is not in the store; selection unchanged");
        return Ok(());
    };

    store.select(Some(id));
    store.save()?;
    println!("{}", format_ticket_line(&ticket));
    Ok(())
}
