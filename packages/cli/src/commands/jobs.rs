//! List commands: the request tabs and booking queues.

use clap::Subcommand;
use colored::*;

use mechlink_client::{ClientConfig, Dispatcher, RequestTab, SessionStore};
use mechlink_lifecycle::{BookingStatus, JobRecord};

use crate::output;

#[derive(Debug, Subcommand)]
pub enum JobsCommands {
    /// Direct requests awaiting your response
    Pending,
    /// Open requests you can accept
    Available,
    /// Requests you have quoted
    Quoted,
    /// Your bookings, filtered by status
    Bookings {
        /// Booking status: active, completed, backjob, cancelled
        #[arg(long, default_value = "active")]
        status: String,
    },
    /// Show one request or booking in detail
    Show {
        /// Record id
        id: i64,
    },
}

pub async fn handle(
    command: JobsCommands,
    config: &ClientConfig,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;

    match command {
        JobsCommands::Pending => list_requests(&dispatcher, RequestTab::Pending).await,
        JobsCommands::Available => list_requests(&dispatcher, RequestTab::Available).await,
        JobsCommands::Quoted => list_requests(&dispatcher, RequestTab::Quoted).await,
        JobsCommands::Bookings { status } => {
            let status = parse_booking_status(&status)?;
            let page = dispatcher.bookings(status).await?;
            if page.jobs.is_empty() {
                println!("No bookings with status '{}'.", status.as_str().dimmed());
            } else {
                println!("{}", output::booking_table(&page.jobs));
                println!("{} total", page.total);
            }
            if let Some(message) = page.message {
                println!("{}", message.dimmed());
            }
            Ok(())
        }
        JobsCommands::Show { id } => {
            let record = find_job(&dispatcher, id).await?;
            output::job_detail(&record);
            Ok(())
        }
    }
}

/// Look the id up across every queue; the first hit wins. Requests and
/// bookings share one id space on the backend.
async fn find_job(dispatcher: &Dispatcher, id: i64) -> anyhow::Result<JobRecord> {
    for tab in [RequestTab::Pending, RequestTab::Available, RequestTab::Quoted] {
        let page = dispatcher.requests(tab).await?;
        if let Some(request) = page.jobs.into_iter().find(|r| r.id == id) {
            return Ok(JobRecord::Request(request));
        }
    }
    for status in [
        BookingStatus::Active,
        BookingStatus::Backjob,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        let page = dispatcher.bookings(status).await?;
        if let Some(booking) = page.jobs.into_iter().find(|b| b.id == id) {
            return Ok(JobRecord::Booking(booking));
        }
    }
    anyhow::bail!("no request or booking with id {id}")
}

async fn list_requests(dispatcher: &Dispatcher, tab: RequestTab) -> anyhow::Result<()> {
    let page = dispatcher.requests(tab).await?;
    if page.jobs.is_empty() {
        println!("Nothing here right now.");
    } else {
        println!("{}", output::request_table(&page.jobs));
        println!("{} total", page.total);
    }
    if let Some(message) = page.message {
        println!("{}", message.dimmed());
    }
    Ok(())
}

pub fn parse_booking_status(raw: &str) -> anyhow::Result<BookingStatus> {
    match raw.trim().to_lowercase().as_str() {
        "active" => Ok(BookingStatus::Active),
        "completed" => Ok(BookingStatus::Completed),
        "backjob" => Ok(BookingStatus::Backjob),
        "cancelled" => Ok(BookingStatus::Cancelled),
        other => anyhow::bail!(
            "unknown booking status '{other}' (expected active, completed, backjob or cancelled)"
        ),
    }
}
