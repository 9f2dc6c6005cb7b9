//! Text formatting for references, search hits and statistics.
//!
//! ```rust
//! use biblia::libs::formatter::{format_minutes, verse_reference};
//!
//! assert_eq!(verse_reference("Juan", 3, 16), "Juan 3:16");
//! assert_eq!(format_minutes(125), "2h 5m");
//! ```

use chrono::{Local, NaiveDate, TimeZone};

/// Search hits longer than this are cut and end in `...`.
pub const SEARCH_PREVIEW_CHARS: usize = 100;

pub fn chapter_title(book_name: &str, chapter: u32) -> String {
    format!("{} {}", book_name.trim(), chapter)
}

pub fn verse_reference(book_name: &str, chapter: u32, verse: u32) -> String {
    format!("{} {}:{}", book_name.trim(), chapter, verse)
}

/// `"Book c:v - text"`, with the text truncated to `max_chars` characters.
pub fn search_line(book_name: &str, chapter: u32, verse: u32, text: &str, max_chars: usize) -> String {
    format!("{} - {}", verse_reference(book_name, chapter, verse), truncate(text, max_chars))
}

/// Chapter numbers laid out `per_row` to a line, right-aligned to the widest.
pub fn chapter_rows(chapters: &[u32], per_row: usize) -> Vec<String> {
    let width = chapters.iter().max().map_or(1, |max| max.to_string().len());
    chapters
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|chapter| format!("{:>width$}", chapter, width = width))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// `45 min`, `2h`, `2h 5m`.
pub fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}h", hours)
    }
}

/// `Today`, `Yesterday`, a date such as `03 Mar 2026`, or `Never`.
pub fn format_last_read(timestamp: Option<i64>, today: NaiveDate) -> String {
    let Some(day) = timestamp.and_then(|ts| Local.timestamp_millis_opt(ts).single()).map(|dt| dt.date_naive()) else {
        return "Never".to_string();
    };

    if day == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        day.format("%d %b %Y").to_string()
    }
}

/// Local date and time of an epoch-milliseconds timestamp.
pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
