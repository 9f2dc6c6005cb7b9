use super::bible::{Book, ChapterPayload, SearchResult};
use super::favorites::FavoriteVerse;
use super::formatter::{
    chapter_rows, format_last_read, format_minutes, format_timestamp, search_line, truncate, verse_reference, SEARCH_PREVIEW_CHARS,
};
use super::history::ReadingHistoryItem;
use super::notes::Note;
use super::plans::ReadingPlan;
use super::stats::ReadingStats;
use chrono::Local;
use prettytable::{row, Table};

const CHAPTERS_PER_ROW: usize = 10;

pub struct View {}

impl View {
    pub fn books(books: &[Book]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ABBR", "TESTAMENT", "CHAPTERS"]);
        for book in books {
            table.add_row(row![book.id, book.name, book.abbreviation, book.testament, book.chapter_count]);
        }
        table.printstd();
    }

    pub fn chapter(payload: &ChapterPayload) {
        for verse in &payload.verses {
            println!("{:>3} {}", verse.verse, verse.text);
        }
    }

    pub fn chapters(chapters: &[u32]) {
        for line in chapter_rows(chapters, CHAPTERS_PER_ROW) {
            println!("  {}", line);
        }
    }

    pub fn search_results(results: &[SearchResult]) {
        for result in results {
            println!(
                "{}",
                search_line(&result.book, result.chapter, result.verse, &result.text, SEARCH_PREVIEW_CHARS)
            );
        }
    }

    pub fn favorites(favorites: &[FavoriteVerse]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "REFERENCE", "TEXT", "TAGS"]);
        for favorite in favorites {
            table.add_row(row![
                favorite.id,
                favorite.reference(),
                truncate(&favorite.text, SEARCH_PREVIEW_CHARS),
                favorite.tags.as_deref().unwrap_or_default().join(", ")
            ]);
        }
        table.printstd();
    }

    pub fn notes(notes: &[Note]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "REFERENCE", "CONTENT"]);
        for note in notes {
            let reference = match (&note.book_name, note.chapter, note.verse_number) {
                (Some(book), Some(chapter), Some(verse)) => verse_reference(book, chapter, verse),
                _ => note.verse.clone().unwrap_or_default(),
            };
            table.add_row(row![note.id, note.title, reference, truncate(&note.content, SEARCH_PREVIEW_CHARS)]);
        }
        table.printstd();
    }

    pub fn plans(plans: &[ReadingPlan]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "TYPE", "DURATION", "PROGRESS", "ACTIVE", "STARTED"]);
        for plan in plans {
            table.add_row(row![
                plan.id,
                plan.title,
                plan.kind,
                plan.duration,
                format!("{}%", plan.progress),
                if plan.is_active { "yes" } else { "" },
                plan.start_date.clone().unwrap_or_default()
            ]);
        }
        table.printstd();
    }

    pub fn history(items: &[ReadingHistoryItem]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "BOOK", "CHAPTER", "LAST VERSE", "READ AT"]);
        for item in items {
            table.add_row(row![
                item.id,
                item.book_name,
                item.chapter,
                item.last_verse.map(|v| v.to_string()).unwrap_or_default(),
                format_timestamp(item.timestamp)
            ]);
        }
        table.printstd();
    }

    pub fn stats(stats: &ReadingStats) {
        let mut table = Table::new();
        let today = Local::now().date_naive();

        table.add_row(row!["Chapters read", stats.total_readings]);
        table.add_row(row!["Books", stats.books_read]);
        table.add_row(row!["Distinct chapters", stats.chapters_read]);
        table.add_row(row!["Streak (days)", stats.consecutive_days]);
        table.add_row(row!["Last read", format_last_read(stats.last_read_date, today)]);
        table.add_row(row!["Total time (estimated)", format_minutes(stats.total_time_minutes)]);
        if let Some(book) = &stats.favorite_book {
            table.add_row(row!["Favorite book", book]);
        }
        table.printstd();
    }
}
