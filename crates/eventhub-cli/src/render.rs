//! Plain-text rendering of hub views.

use eventhub_core::{FilterState, HubView};
use eventhub_events::Pagination;
use eventhub_models::Event;
use eventhub_session::AuthError;

/// Truncates `s` to at most `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Renders one event as a card. User events get a QR code marker.
pub fn event_card(event: &Event, is_user_event: bool) -> String {
    let mut card = format!(
        "{} {}\n    Date:     {}\n    Location: {}\n    Category: {}",
        if is_user_event { "*" } else { "-" },
        event.title,
        event.date,
        event.location,
        event.category
    );
    if is_user_event {
        card.push_str(&format!("\n    QR code:  {}", event.id));
    }
    card
}

/// Renders events as a table, one row per event.
pub fn event_table(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let mut out = format!(
        "{:<5}  {:<36}  {:<10}  {:<15}  CATEGORY\n",
        "ID", "TITLE", "DATE", "LOCATION"
    );
    out.push_str(&"-".repeat(84));
    for event in events {
        out.push_str(&format!(
            "\n{:<5}  {:<36}  {:<10}  {:<15}  {}",
            event.id,
            truncate(&event.title, 36),
            event.date,
            truncate(&event.location, 15),
            event.category
        ));
    }
    out
}

/// Renders the page selector, or `None` when there is only one page.
pub fn pagination_bar(pagination: &Pagination) -> Option<String> {
    if !pagination.shows_controls() {
        return None;
    }

    let pages: Vec<String> = pagination
        .page_numbers()
        .map(|page| {
            if page == pagination.current_page() {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();
    Some(format!("Pages: {}", pages.join(" ")))
}

/// Renders the non-empty filters, or `None` when nothing is filtered.
pub fn active_filters(filter: &FilterState) -> Option<String> {
    let parts: Vec<String> = [
        ("search", filter.search_term()),
        ("date", filter.date_filter()),
        ("category", filter.category_filter()),
        ("location", filter.location_filter()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!("{}={:?}", name, value))
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(format!("Filters: {}", parts.join(" ")))
    }
}

/// Renders a user notice.
pub fn notice(err: &AuthError) -> String {
    format!("! {}", err)
}

/// Renders the whole screen: my events, all events, pages and dialogs.
pub fn screen(view: &HubView) -> String {
    let mut sections = Vec::new();

    if view.logged_in {
        let mut mine = String::from("My Events\n");
        if view.my_events.is_empty() {
            mine.push_str("(none)");
        } else {
            let cards: Vec<String> = view.my_events.iter().map(|e| event_card(e, true)).collect();
            mine.push_str(&cards.join("\n"));
        }
        sections.push(mine);
    }

    let mut all = format!("All Events ({} matching)\n", view.filtered_count);
    if let Some(filters) = active_filters(&view.filter) {
        all.push_str(&filters);
        all.push('\n');
    }
    if view.filtered_count > 0 && view.pagination.is_past_end() {
        all.push_str(&format!(
            "Page {} is past the last page ({}), use /page 1",
            view.pagination.current_page(),
            view.pagination.total_pages()
        ));
    } else {
        all.push_str(&event_table(&view.events));
    }
    if let Some(bar) = pagination_bar(&view.pagination) {
        all.push('\n');
        all.push_str(&bar);
    }
    sections.push(all);

    if view.scanner_open {
        sections.push("Scanner open: enter a QR code, or /cancel".to_string());
    }
    if let Some(cert) = &view.certificate {
        sections.push(format!("{}\n\n(/close to dismiss)", cert));
    }
    if let Some(err) = &view.notice {
        sections.push(format!("{} (/ok to dismiss)", notice(err)));
    }

    sections.join("\n\n")
}
