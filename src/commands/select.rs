use crate::error::{Result, TckError};
use crate::store::Store;

/// Set or clear the current selection.
///
/// The id is persisted as-is: whether it exists in the store is not
/// checked here, lookups simply yield "no selection" for a stale id.
pub fn cmd_select(id: Option<&str>, clear: bool) -> Result<()> {
    let mut store = Store::load();

    if clear {
        store.select(None);
        store.save()?;
        println!("selection cleared");
        return Ok(());
    }

    let Some(id) = id else {
        return Err(TckError::Other(
            "pass a ticket id or --clear".to_string(),
        ));
    };

    store.select(Some(id.to_string()));
    store.save()?;
    println!("{id}");
    Ok(())
}
