//! Reading statistics derived from the reading history.
//!
//! Statistics are recomputed from the full history on every recorded
//! reading, never patched incrementally, so deleting history entries can
//! never leave them inconsistent. The only carried-over value is the
//! estimated reading time, which grows by [`MINUTES_PER_READING`] per
//! recorded reading.

use crate::libs::history::ReadingHistoryItem;
use crate::libs::messages::Message;
use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Estimated minutes credited for each chapter read.
pub const MINUTES_PER_READING: u64 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub total_readings: usize,
    pub books_read: usize,
    pub chapters_read: usize,
    pub last_read_date: Option<i64>,
    pub consecutive_days: u32,
    pub favorite_book: Option<String>,
    pub total_time_minutes: u64,
}

impl ReadingStats {
    pub fn is_empty(&self) -> bool {
        self.total_readings == 0
    }
}

/// Statistics for `history` (newest first) as of `today`.
///
/// `previous` is the snapshot before the reading that triggered the
/// recomputation; only its estimated minutes are used. An empty history
/// yields the empty snapshot.
pub fn recompute(history: &[ReadingHistoryItem], previous: &ReadingStats, today: NaiveDate) -> ReadingStats {
    if history.is_empty() {
        return ReadingStats::default();
    }

    let books: HashSet<u32> = history.iter().map(|item| item.book_id).collect();
    let chapters: HashSet<(u32, u32)> = history.iter().map(|item| (item.book_id, item.chapter)).collect();

    ReadingStats {
        total_readings: history.len(),
        books_read: books.len(),
        chapters_read: chapters.len(),
        last_read_date: history.iter().map(|item| item.timestamp).max(),
        consecutive_days: consecutive_days(history, today),
        favorite_book: favorite_book(history),
        total_time_minutes: previous.total_time_minutes + MINUTES_PER_READING,
    }
}

/// Most read book name. Ties go to the name met first while walking the
/// history from newest to oldest.
pub fn favorite_book(history: &[ReadingHistoryItem]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in history {
        match counts.iter_mut().find(|(name, _)| *name == item.book_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((&item.book_name, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Consecutive local calendar days with at least one reading, counted back
/// from `today`. A day without reading today means a streak of 0, even if
/// yesterday had one.
pub fn consecutive_days(history: &[ReadingHistoryItem], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = history.iter().filter_map(|item| reading_day(item.timestamp)).collect();

    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Local calendar day of an epoch-milliseconds timestamp.
pub fn reading_day(timestamp: i64) -> Option<NaiveDate> {
    Local.timestamp_millis_opt(timestamp).single().map(|dt| dt.date_naive())
}

pub fn motivation(stats: &ReadingStats) -> Message {
    if stats.consecutive_days >= 7 {
        Message::MotivationGreatStreak
    } else if stats.total_readings >= 50 {
        Message::MotivationGreatProgress
    } else if stats.total_readings >= 10 {
        Message::MotivationKeepGoing
    } else {
        Message::MotivationStart
    }
}
