//! CLI command definitions and handlers

use clap::{ArgGroup, Parser, Subcommand};
pub use clap_complete::Shell;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::error::Result;
use crate::output::{json, table};

pub mod appointment;
pub mod args;
pub mod auth;
pub mod booking;
pub mod context;
pub mod handlers;
pub mod nav;
pub mod open;
pub mod org;
pub mod progress;
pub mod prompt;
pub mod service;
pub mod specialist;
pub mod status;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// Journal CLI - book appointments with organizations and their specialists
#[derive(Parser, Debug)]
#[command(name = "journal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "JOURNAL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "JOURNAL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Backend base URL
    #[arg(long, global = true, env = "JOURNAL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Access token for this invocation (not saved)
    #[arg(long, global = true, env = "JOURNAL_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOURNAL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and save the access token
    Login {
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Full name
        #[arg(long)]
        fio: Option<String>,

        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the saved access token
    Logout,

    /// Show the signed-in user
    Me,

    /// Show configuration and session status
    Status,

    /// Show navigation links for the current session
    Nav,

    /// Organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Services offered by organizations and specialists
    #[command(subcommand)]
    Service(ServiceCommands),

    /// Specialists of an organization
    #[command(subcommand)]
    Specialist(SpecialistCommands),

    /// Your bookings
    #[command(subcommand)]
    Booking(BookingCommands),

    /// Bookings made with an organization you own
    #[command(subcommand)]
    Appointment(AppointmentCommands),

    /// Open a web client path, e.g. "/services?organization_id=ID"
    Open {
        path: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   journal completion bash > /etc/bash_completion.d/journal
  zsh:    journal completion zsh > \"${fpath[1]}/_journal\"
  fish:   journal completion fish > ~/.config/fish/completions/journal.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Create an organization you own
    Create {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Show the organization list with the new organization first
        #[arg(long)]
        list: bool,
    },
}

/// Service subcommands
#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List the services of an organization or a specialist
    #[command(group(ArgGroup::new("owner").required(true).args(["org", "specialist"])))]
    List {
        /// Organization ID
        #[arg(long)]
        org: Option<String>,

        /// Specialist ID
        #[arg(long)]
        specialist: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Add a service to an organization
    Create {
        #[arg(long)]
        title: Option<String>,

        /// Price, a non-negative number
        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Organization ID
        #[arg(long)]
        org: String,

        /// Show the organization's services with the new one first
        #[arg(long)]
        list: bool,
    },
}

/// Specialist subcommands
#[derive(Subcommand, Debug)]
pub enum SpecialistCommands {
    /// List the specialists of an organization
    List {
        /// Organization ID
        #[arg(long)]
        org: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Add a specialist to an organization
    Create {
        /// Full name
        #[arg(long)]
        fio: Option<String>,

        /// Organization ID
        #[arg(long)]
        org: String,

        /// Show the organization's specialists with the new one first
        #[arg(long)]
        list: bool,
    },

    /// Let a specialist perform one of the organization's services
    Assign {
        /// Specialist ID
        #[arg(long)]
        specialist: String,

        /// Service ID (picked from the organization's services when omitted)
        #[arg(long)]
        service: Option<String>,

        /// Organization whose services to pick from
        #[arg(long)]
        org: String,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<String>,
    },
}

/// Booking subcommands
#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// List your bookings
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Book a specialist service
    Create {
        /// Specialist service ID (see `journal service list --specialist`)
        #[arg(long)]
        specialist_service: String,

        /// Note for the specialist
        #[arg(long)]
        note: Option<String>,

        /// Appointment time, e.g. 2025-03-01T10:30
        #[arg(long)]
        time: Option<String>,
    },
}

/// Appointment subcommands
#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// List bookings made with an organization
    List {
        /// Organization ID
        #[arg(long)]
        org: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Confirmation line for table and pretty output; JSON stays machine-readable.
pub(crate) fn announce(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Json => {}
        OutputFormat::Pretty => println!("{} {}", "✓".green(), message.bold()),
        OutputFormat::Table => println!("{}", message),
    }
}

/// Report a created record.
pub(crate) fn created<D: Tabled + Serialize>(
    format: OutputFormat,
    message: &str,
    record: D,
) -> Result<()> {
    announce(format, message);
    match format {
        OutputFormat::Json => println!("{}", json::format_json(&record)?),
        _ => println!("{}", table::format_table(&[record], table::NO_RESULTS)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_service_list_needs_an_owner() {
        assert!(Cli::try_parse_from(["journal", "service", "list"]).is_err());
        assert!(
            Cli::try_parse_from(["journal", "service", "list", "--org", "o", "--specialist", "s"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["journal", "service", "list", "--specialist", "s"]).is_ok());
    }

    #[test]
    fn test_create_list_flag() {
        let cli = Cli::try_parse_from([
            "journal", "org", "create", "--name", "Clinic", "--list",
        ])
        .unwrap();
        match cli.command {
            Commands::Org(OrgCommands::Create { name, list, .. }) => {
                assert_eq!(name.as_deref(), Some("Clinic"));
                assert!(list);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(Cli::try_parse_from(["journal", "org", "list", "--page-size", "0"]).is_err());
        let cli = Cli::try_parse_from(["journal", "org", "list", "-n", "5", "--all"]).unwrap();
        match cli.command {
            Commands::Org(OrgCommands::List { pagination }) => {
                assert_eq!(pagination.page_size, Some(5));
                assert!(pagination.all);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
