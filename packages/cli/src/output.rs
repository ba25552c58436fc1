//! Table and notification rendering. Presentation only; the labels and
//! action sets all come from the lifecycle view projection.

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use mechlink_lifecycle::{
    booking_view, request_view, Badge, Booking, JobRecord, Request, StatusView,
};

pub fn request_table(jobs: &[Request]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Kind", "Status", "Client", "Summary", "Created"]);
    for request in jobs {
        let view = request_view(request.status, request.kind);
        table.add_row(vec![
            request.id.to_string(),
            request.kind.as_str().to_string(),
            view.label.to_string(),
            request.client.name.clone(),
            request.summary.clone(),
            request.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

pub fn booking_table(jobs: &[Booking]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Status", "Service", "Client", "Fee", "Booked"]);
    for booking in jobs {
        let view = booking_view(booking.status);
        table.add_row(vec![
            booking.id.to_string(),
            view.label.to_string(),
            booking.service.clone(),
            booking.client.name.clone(),
            format!("{:.2}", booking.fee),
            booking.booked_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

/// Status label colored by its badge.
pub fn badge(view: &StatusView) -> ColoredString {
    match view.badge {
        Badge::Pending => view.label.yellow(),
        Badge::Quoted => view.label.blue(),
        Badge::Accepted | Badge::Completed => view.label.green(),
        Badge::Active => view.label.cyan(),
        Badge::Backjob => view.label.magenta(),
        Badge::Declined | Badge::Cancelled => view.label.red(),
        Badge::Neutral => view.label.dimmed(),
    }
}

/// Detail view for one record: the terminal analogue of the job-detail
/// screen, including the action set the projection allows.
pub fn job_detail(record: &JobRecord) {
    match record {
        JobRecord::Request(request) => {
            let view = request_view(request.status, request.kind);
            println!("request #{}  {}", request.id, badge(&view).bold());
            println!("  kind     {}", request.kind.as_str());
            println!("  client   {}", request.client.name);
            if let Some(target) = &request.target {
                println!("  target   {}", target.name);
            }
            println!("  summary  {}", request.summary);
            println!("  created  {}", request.created_at.format("%Y-%m-%d %H:%M"));
            println!("  actions  {}", action_list(&view));
        }
        JobRecord::Booking(booking) => {
            let view = booking_view(booking.status);
            println!("booking #{}  {}", booking.id, badge(&view).bold());
            println!("  service   {}", booking.service);
            println!("  client    {}", booking.client.name);
            println!("  provider  {}", booking.provider.name);
            println!("  fee       {:.2}", booking.fee);
            println!("  booked    {}", booking.booked_at.format("%Y-%m-%d %H:%M"));
            if let Some(completed_at) = booking.completed_at {
                println!("  completed {}", completed_at.format("%Y-%m-%d %H:%M"));
            }
            if let Some(location) = &booking.location {
                println!("  location  {}", location);
            }
            println!("  actions   {}", action_list(&view));
        }
    }
}

fn action_list(view: &StatusView) -> String {
    if view.actions.is_empty() {
        return "(none)".to_string();
    }
    view.actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn notify_request(request: &Request, message: &str) {
    let view = request_view(request.status, request.kind);
    println!("{} {message}", "✓".green());
    println!("  request #{} → {}", request.id, badge(&view).bold());
}

pub fn notify_booking(booking: &Booking, message: &str) {
    let view = booking_view(booking.status);
    println!("{} {message}", "✓".green());
    println!("  booking #{} → {}", booking.id, badge(&view).bold());
}
