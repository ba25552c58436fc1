use clap::{Parser, Subcommand};
use colored::*;
use std::process;

use mechlink_client::{ClientConfig, SessionStore};

mod commands;
mod output;

use commands::actions::{self, QuoteArgs};
use commands::jobs::JobsCommands;
use commands::session::SessionCommands;

#[derive(Parser)]
#[command(name = "mechlink")]
#[command(about = "Mechlink CLI - mechanic's client for the repair marketplace")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List request and booking queues
    #[command(subcommand)]
    Jobs(JobsCommands),
    /// Accept a pending request
    Accept {
        /// Request id
        id: i64,
    },
    /// Decline a pending request
    Decline {
        /// Request id
        id: i64,
    },
    /// Send a quote for a pending direct request
    Quote(QuoteArgs),
    /// Cancel a request
    CancelRequest {
        /// Request id
        id: i64,
        /// Why the request is being cancelled
        #[arg(long)]
        reason: String,
    },
    /// Cancel an active booking
    CancelBooking {
        /// Booking id
        id: i64,
        /// Why the booking is being cancelled
        #[arg(long)]
        reason: String,
    },
    /// Complete an active booking with payment
    Complete {
        /// Booking id
        id: i64,
        /// Payment amount received
        #[arg(long)]
        amount: String,
        /// Proof-of-payment reference (file path or upload id)
        #[arg(long)]
        proof: String,
    },
    /// Confirm a follow-up job reschedule
    Reschedule {
        /// Booking id
        id: i64,
    },
    /// Manage the stored session token
    #[command(subcommand)]
    Session(SessionCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {e:#}", "✗".red());
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    let store = SessionStore::new()?;

    match cli.command {
        Commands::Jobs(command) => commands::jobs::handle(command, &config, &store).await,
        Commands::Accept { id } => actions::accept(id, &config, &store).await,
        Commands::Decline { id } => actions::decline(id, &config, &store).await,
        Commands::Quote(args) => actions::quote(args, &config, &store).await,
        Commands::CancelRequest { id, reason } => {
            actions::cancel_request(id, &reason, &config, &store).await
        }
        Commands::CancelBooking { id, reason } => {
            actions::cancel_booking(id, &reason, &config, &store).await
        }
        Commands::Complete { id, amount, proof } => {
            actions::complete(id, &amount, &proof, &config, &store).await
        }
        Commands::Reschedule { id } => actions::reschedule(id, &config, &store).await,
        Commands::Session(command) => commands::session::handle(command, &store).await,
    }
}
