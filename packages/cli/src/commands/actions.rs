//! Mutating commands. Each one fetches the live record first, runs the
//! dispatcher (guards, backend call, confirmed transition), and prints the
//! resulting state.

use anyhow::Context;
use clap::Args;

use mechlink_client::{ClientConfig, Dispatcher, RequestTab, SessionStore};
use mechlink_lifecycle::{Booking, BookingStatus, DraftRow, QuoteDraft, Request};

use crate::output;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Request id
    pub id: i64,
    /// Line item as NAME=PRICE, repeatable
    #[arg(long = "item", value_name = "NAME=PRICE", required = true)]
    pub items: Vec<String>,
    /// Note shown to the client alongside the quote
    #[arg(long)]
    pub note: Option<String>,
}

pub async fn accept(id: i64, config: &ClientConfig, store: &SessionStore) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut request = find_request(&dispatcher, id).await?;
    dispatcher.accept_request(&mut request).await?;
    output::notify_request(&request, "Request accepted. The booking is on your board.");
    Ok(())
}

pub async fn decline(id: i64, config: &ClientConfig, store: &SessionStore) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut request = find_request(&dispatcher, id).await?;
    dispatcher.decline_request(&mut request).await?;
    output::notify_request(&request, "Request declined.");
    Ok(())
}

pub async fn quote(
    args: QuoteArgs,
    config: &ClientConfig,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let rows: Vec<DraftRow> = args.items.iter().map(|raw| parse_item(raw)).collect();
    let draft = QuoteDraft::new(rows, args.note.unwrap_or_default());

    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut request = find_request(&dispatcher, args.id).await?;
    let quote = dispatcher.quote_request(&mut request, &draft).await?;

    output::notify_request(
        &request,
        &format!("Quote sent, {} item(s), total {:.2}.", quote.items.len(), quote.total()),
    );
    Ok(())
}

pub async fn cancel_request(
    id: i64,
    reason: &str,
    config: &ClientConfig,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut request = find_request(&dispatcher, id).await?;
    dispatcher.cancel_request(&mut request, reason).await?;
    output::notify_request(&request, "Request cancelled.");
    Ok(())
}

pub async fn cancel_booking(
    id: i64,
    reason: &str,
    config: &ClientConfig,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut booking = find_booking(&dispatcher, id, &[BookingStatus::Active]).await?;
    dispatcher.cancel_booking(&mut booking, reason).await?;
    output::notify_booking(&booking, "Booking cancelled.");
    Ok(())
}

pub async fn complete(
    id: i64,
    amount: &str,
    proof: &str,
    config: &ClientConfig,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let mut booking = find_booking(&dispatcher, id, &[BookingStatus::Active]).await?;
    dispatcher.complete_booking(&mut booking, amount, proof).await?;
    output::notify_booking(&booking, "Booking completed. Payment recorded.");
    Ok(())
}

pub async fn reschedule(id: i64, config: &ClientConfig, store: &SessionStore) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::connect(config, store).await?;
    let booking = find_booking(&dispatcher, id, &[BookingStatus::Backjob]).await?;
    dispatcher.reschedule_backjob(&booking).await?;
    output::notify_booking(&booking, "Reschedule confirmed. The client will be notified.");
    Ok(())
}

/// `NAME=PRICE` into a raw draft row; rows that don't parse stay raw and are
/// rejected by quote validation with a user-facing message.
fn parse_item(raw: &str) -> DraftRow {
    match raw.split_once('=') {
        Some((name, price)) => DraftRow::new(name.trim(), price.trim()),
        None => DraftRow::new(raw.trim(), ""),
    }
}

/// The surfaces operate on freshly fetched records, never on stale ids.
async fn find_request(dispatcher: &Dispatcher, id: i64) -> anyhow::Result<Request> {
    for tab in [RequestTab::Pending, RequestTab::Available, RequestTab::Quoted] {
        let page = dispatcher.requests(tab).await?;
        if let Some(request) = page.jobs.into_iter().find(|r| r.id == id) {
            return Ok(request);
        }
    }
    anyhow::bail!("request {id} is not in any of your request lists")
}

async fn find_booking(
    dispatcher: &Dispatcher,
    id: i64,
    statuses: &[BookingStatus],
) -> anyhow::Result<Booking> {
    for status in statuses {
        let page = dispatcher
            .bookings(*status)
            .await
            .with_context(|| format!("fetching {} bookings", status.as_str()))?;
        if let Some(booking) = page.jobs.into_iter().find(|b| b.id == id) {
            return Ok(booking);
        }
    }
    anyhow::bail!("booking {id} not found in your current bookings")
}
