//! French-locale timestamp formatting for GUI status lines.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};

/// French name of a weekday.
pub fn french_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}

/// Format a timestamp as `"<day name> dd-mm-yyyy HH:MM:SS:mmm"`.
pub fn format_timestamp_fr<Tz: TimeZone>(when: &DateTime<Tz>) -> String {
    format!(
        "{} {:02}-{:02}-{:04} {:02}:{:02}:{:02}:{:03}",
        french_day_name(when.weekday()),
        when.day(),
        when.month(),
        when.year(),
        when.hour(),
        when.minute(),
        when.second(),
        when.timestamp_subsec_millis(),
    )
}

/// The current local time in the same notation.
pub fn timestamp_fr_now() -> String {
    format_timestamp_fr(&Local::now())
}
