use super::*;

// =============================================================
// clock_label
// =============================================================

#[test]
fn clock_label_extracts_hours_and_minutes() {
    assert_eq!(clock_label("2026-01-05T10:30:00Z"), "10:30");
}

#[test]
fn clock_label_handles_fractional_seconds_and_offsets() {
    assert_eq!(clock_label("2026-01-05T23:59:59.123+02:00"), "23:59");
}

#[test]
fn clock_label_falls_back_to_raw_input() {
    assert_eq!(clock_label("yesterday"), "yesterday");
    assert_eq!(clock_label("2026-01-05T9"), "2026-01-05T9");
}

// =============================================================
// date_label
// =============================================================

#[test]
fn date_label_extracts_date_part() {
    assert_eq!(date_label("2026-01-05T10:30:00Z"), "2026-01-05");
}

#[test]
fn date_label_falls_back_to_raw_input() {
    assert_eq!(date_label("not-a-date"), "not-a-date");
}

// =============================================================
// activity_label
// =============================================================

#[test]
fn activity_label_shows_clock_for_todays_timestamps() {
    assert_eq!(activity_label("2026-01-05T10:30:00Z", "2026-01-05"), "10:30");
}

#[test]
fn activity_label_shows_date_for_older_timestamps() {
    assert_eq!(activity_label("2026-01-04T10:30:00Z", "2026-01-05"), "2026-01-04");
}

#[test]
fn activity_label_with_unknown_today_shows_date() {
    assert_eq!(activity_label("2026-01-05T10:30:00Z", ""), "2026-01-05");
}

#[test]
fn activity_label_falls_back_to_raw_input() {
    assert_eq!(activity_label("yesterday", "2026-01-05"), "yesterday");
}
