mod create;
mod link;
mod ls;
mod open;
mod select;
mod set;
mod show;

pub use create::{CreateOptions, cmd_create};
pub use link::cmd_copy_link;
pub use ls::cmd_ls;
pub use open::cmd_open;
pub use select::cmd_select;
pub use set::cmd_set;
pub use show::cmd_show;

use crate::error::Result;

/// Print a value as pretty JSON (shared by every `--json` path)
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Hint printed when a command needs a selection and there is none.
pub(crate) const NO_SELECTION_HINT: &str =
    "No ticket selected. Run 'tck select <id>' or pass an id.";
