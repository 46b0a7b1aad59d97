//! Journal CLI - terminal client for the Journal booking service

use clap::{CommandFactory, Parser};
use clap_complete::generate;

mod cli;
mod client;
mod config;
mod error;
mod forms;
mod models;
mod output;
mod paging;
mod session;
mod shell;

use cli::args::GlobalOptions;
use cli::{
    AppointmentCommands, BookingCommands, Cli, Commands, OrgCommands, ServiceCommands,
    SpecialistCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` for this crate with `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "journal=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Register {
            fio,
            email,
            password,
        } => cli::auth::register(&opts, fio, email, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Me => cli::auth::me(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Nav => cli::nav::run(&opts).await,
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { pagination } => cli::org::list(&opts, &pagination).await,
            OrgCommands::Create {
                name,
                description,
                location,
                list,
            } => cli::org::create(&opts, name, description, location, list).await,
        },
        Commands::Service(service_cmd) => match service_cmd {
            ServiceCommands::List {
                org,
                specialist,
                pagination,
            } => cli::service::list(&opts, org, specialist, &pagination).await,
            ServiceCommands::Create {
                title,
                price,
                description,
                org,
                list,
            } => cli::service::create(&opts, title, price, description, org, list).await,
        },
        Commands::Specialist(specialist_cmd) => match specialist_cmd {
            SpecialistCommands::List { org, pagination } => {
                cli::specialist::list(&opts, org, &pagination).await
            }
            SpecialistCommands::Create { fio, org, list } => {
                cli::specialist::create(&opts, fio, org, list).await
            }
            SpecialistCommands::Assign {
                specialist,
                service,
                org,
                duration,
            } => cli::specialist::assign(&opts, specialist, service, org, duration).await,
        },
        Commands::Booking(booking_cmd) => match booking_cmd {
            BookingCommands::List { pagination } => cli::booking::list(&opts, &pagination).await,
            BookingCommands::Create {
                specialist_service,
                note,
                time,
            } => cli::booking::create(&opts, specialist_service, note, time).await,
        },
        Commands::Appointment(AppointmentCommands::List { org, pagination }) => {
            cli::appointment::list(&opts, org, &pagination).await
        }
        Commands::Open { path, pagination } => cli::open::run(&opts, &path, &pagination).await,
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
        Commands::Version => {
            println!("journal version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
