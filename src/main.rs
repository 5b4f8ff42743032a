use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tck::cli::{Cli, Commands, generate_completions};
use tck::commands::{
    CreateOptions, cmd_copy_link, cmd_create, cmd_ls, cmd_open, cmd_select, cmd_set, cmd_show,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls {
            query,
            status,
            priority,
            sort,
            json,
        } => cmd_ls(query.as_deref(), status, priority, sort, json),
        Commands::Show { id, json } => cmd_show(id.as_deref(), json),
        Commands::Create {
            title,
            customer,
            priority,
            status,
            description,
            json,
        } => cmd_create(
            CreateOptions {
                title,
                customer,
                priority,
                status,
                description,
            },
            json,
        ),
        Commands::Set {
            id,
            status,
            owner,
            json,
        } => cmd_set(&id, status, owner.as_deref(), json),
        Commands::Select { id, clear } => cmd_select(id.as_deref(), clear),
        Commands::Open { link } => cmd_open(&link),
        Commands::CopyLink { id } => cmd_copy_link(id.as_deref()),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
