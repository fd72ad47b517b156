//! Timestamp display formatting.
//!
//! The server stamps messages with ISO 8601 strings; the thread and sidebar
//! only ever show a short clock or date label, so formatting is plain string
//! slicing with no timezone math.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Extract an `HH:MM` clock label from an ISO 8601 timestamp.
///
/// Falls back to the raw input when the shape is unexpected, so a server
/// format change degrades to verbose rather than wrong.
pub fn clock_label(iso: &str) -> String {
    let Some((_, rest)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    if rest.len() < 5 || !rest.is_char_boundary(5) {
        return iso.to_owned();
    }
    rest[..5].to_owned()
}

/// Extract a `YYYY-MM-DD` date label from an ISO 8601 timestamp.
pub fn date_label(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, _)) => date.to_owned(),
        None => iso.to_owned(),
    }
}

/// Sidebar label for a conversation's last activity: a clock when it
/// happened today, the date otherwise.
pub fn activity_label(iso: &str, today: &str) -> String {
    let date = date_label(iso);
    if date == today { clock_label(iso) } else { date }
}

/// The browser's current date as `YYYY-MM-DD`, in UTC to match server
/// timestamps. Empty on the server, where activity labels render as dates
/// until hydration.
pub fn today_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        date_label(&iso)
    }
    #[cfg(not(feature = "hydrate"))]
    String::new()
}
