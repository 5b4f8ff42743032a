//! Ticket store: the ordered ticket collection plus the current selection,
//! persisted as a single JSON document.
//!
//! The store is an explicit value: commands load it, mutate it, and save
//! it back. Every save rewrites the full document; there are no deltas and
//! no transactions. A missing or malformed state file is never an error.
//! The store falls back to the fixed seed set and logs the reason.

pub mod seed;

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::state_file;
use crate::types::Ticket;
use crate::utils::write_file_atomic;

/// Ticket ids look like `TCK-1042`; the numeric suffix drives id allocation.
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^TCK-(\d+)$").expect("ticket id regex should be valid"));

/// Suffix used when no existing id matches the pattern.
const ID_BASE: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub tickets: Vec<Ticket>,
    #[serde(rename = "selectedId")]
    pub selected_id: Option<String>,
}

impl Store {
    /// Read the persisted state, falling back to the seed set when the
    /// file is missing or structurally invalid. Corruption is logged but
    /// never surfaced as an error.
    pub fn load() -> Store {
        Store::load_from(&state_file())
    }

    pub fn load_from(path: &Path) -> Store {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        "failed to read state file {}: {e}; starting from seed data",
                        path.display()
                    );
                }
                return Store::seeded();
            }
        };

        match serde_json::from_str::<Store>(&raw) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    "discarding malformed state file {}: {e}; starting from seed data",
                    path.display()
                );
                Store::seeded()
            }
        }
    }

    /// A fresh store holding the fixed seed tickets and no selection.
    pub fn seeded() -> Store {
        Store {
            tickets: seed::default_tickets(),
            selected_id: None,
        }
    }

    /// Persist the full state. Atomic write, no retries.
    pub fn save(&self) -> Result<()> {
        self.save_to(&state_file())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_file_atomic(path, &json)
    }

    pub fn find(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// The currently selected ticket, if the selection points at one that
    /// exists. A stale selection simply yields `None`.
    pub fn selected(&self) -> Option<&Ticket> {
        self.selected_id.as_deref().and_then(|id| self.find(id))
    }

    /// Insert-or-replace keyed by id: an existing ticket is replaced in
    /// place (keeping its position), a new one is prepended.
    pub fn upsert(&mut self, ticket: Ticket) {
        match self.tickets.iter().position(|t| t.id == ticket.id) {
            Some(idx) => self.tickets[idx] = ticket,
            None => self.tickets.insert(0, ticket),
        }
    }

    /// Set the selection. Existence of the id is intentionally not
    /// checked; lookups treat a stale selection as "no selection".
    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Next free ticket id: one past the highest numeric suffix among ids
    /// matching `TCK-<integer>`, or `TCK-1001` for a store without any.
    ///
    /// Not collision-safe across concurrent writers; the tool assumes a
    /// single user and a single process.
    pub fn next_id(&self) -> String {
        let max = self
            .tickets
            .iter()
            .filter_map(|t| ID_PATTERN.captures(&t.id))
            .filter_map(|caps| caps[1].parse::<u64>().ok())
            .max()
            .unwrap_or(ID_BASE);
        format!("TCK-{}", max + 1)
    }
}
