use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::query::SortKey;
use crate::types::{TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "tck")]
#[command(about = "Local support-ticket tracking")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tickets with filters and sorting
    #[command(visible_alias = "l")]
    Ls {
        /// Free-text filter matched against id, title, customer, and owner
        query: Option<String>,

        /// Only tickets with this status
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Only tickets with this priority
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<TicketPriority>,

        /// Sort key (default: updated_desc)
        #[arg(long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket in full (defaults to the current selection)
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title
        title: String,

        /// Customer the ticket belongs to
        #[arg(short, long)]
        customer: String,

        /// Priority: p1, p2, p3, p4 (default: p2)
        #[arg(short, long, default_value = "p2", value_parser = parse_priority)]
        priority: TicketPriority,

        /// Initial status (default: open)
        #[arg(long, default_value = "open", value_parser = parse_status)]
        status: TicketStatus,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a ticket's status and/or owner
    Set {
        /// Ticket ID
        id: String,

        /// New status
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// New owner (empty resets to Unassigned)
        #[arg(long)]
        owner: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set or clear the current selection
    Select {
        /// Ticket ID
        #[arg(required_unless_present = "clear")]
        id: Option<String>,

        /// Clear the selection instead
        #[arg(long, conflicts_with = "id")]
        clear: bool,
    },

    /// Select the ticket referenced by a shareable link
    Open {
        /// Link of the form <board-url>#ticket=<id>
        link: String,
    },

    /// Copy a ticket's shareable link to the clipboard
    CopyLink {
        /// Ticket ID (defaults to the current selection)
        id: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    s.parse::<TicketStatus>().map_err(|_| {
        format!(
            "invalid status '{s}'. Valid values: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    s.parse::<TicketPriority>().map_err(|_| {
        format!(
            "invalid priority '{s}'. Valid values: {}",
            VALID_PRIORITIES.join(", ")
        )
    })
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|_| {
        format!(
            "invalid sort key '{s}'. Valid values: {}",
            SortKey::ALL_STRINGS.join(", ")
        )
    })
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tck", &mut io::stdout());
}
