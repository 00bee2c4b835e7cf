use chrono::{DateTime, NaiveDate, Utc};

/// Status strings arrive lowercase from the server ("pending",
/// "approved"); capitalize the first letter for display.
pub fn capitalize_status(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn badge_class(status: &str) -> &'static str {
    match status {
        "approved" | "completed" | "open" => "text-green-600",
        "pending" => "text-yellow-600",
        "rejected" | "closed" => "text-red-600",
        _ => "text-gray-600",
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn timestamp(ts: &Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%B %d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize_status("pending"), "Pending");
        assert_eq!(capitalize_status("closed"), "Closed");
        assert_eq!(capitalize_status(""), "");
    }

    #[test]
    fn badge_color_tracks_status_family() {
        assert_eq!(badge_class("approved"), "text-green-600");
        assert_eq!(badge_class("pending"), "text-yellow-600");
        assert_eq!(badge_class("rejected"), "text-red-600");
        assert_eq!(badge_class("unknown"), "text-gray-600");
    }

    #[test]
    fn dates_render_in_both_forms() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(long_date(d), "March 07, 2026");
        assert_eq!(short_date(d), "2026-03-07");
    }
}
