use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === VERSE STORE MESSAGES ===
            Message::DatabaseUnavailable(reason) => format!("The Bible database could not be opened: {}. Restart after fixing it", reason),
            Message::DatabaseOpened(path) => format!("Bible database opened: {}", path),
            Message::BookNotFound(book) => format!("Book not found: {}", book),
            Message::ChapterNotFound(reference) => format!("Chapter not found: {}", reference),
            Message::VerseNotFound(reference) => format!("Verse not found: {}", reference),
            Message::LoadChapterFailed(error) => format!("Failed to load the chapter: {}. Try again", error),
            Message::BooksHeader => "📖 Books".to_string(),
            Message::BookChaptersHeader(book, count) => format!("📖 {}: {} chapters", book, count),

            // === READING MESSAGES ===
            Message::ChapterHeader(title) => format!("📖 {}", title),
            Message::AtFirstChapter => "You are already at the first chapter of the Bible".to_string(),
            Message::AtLastChapter => "You are already at the last chapter of the Bible".to_string(),
            Message::NothingReadYet => "Nothing read yet. Open a chapter with `biblia read <book> [chapter]`".to_string(),
            Message::PagerPrompt => "[n]ext, [p]revious, [q]uit".to_string(),
            Message::PagerUnknownKey(key) => format!("Unknown key '{}'", key),

            // === SEARCH MESSAGES ===
            Message::SearchTooShort(min) => format!("Type at least {} characters to search", min),
            Message::SearchNoResults(term) => format!("No verses contain \"{}\"", term),
            Message::SearchResultsCount(count) => {
                if *count == 1 {
                    "1 result found".to_string()
                } else {
                    format!("{} results found", count)
                }
            }

            // === FAVORITE MESSAGES ===
            Message::FavoriteAdded(reference) => format!("{} added to favorites", reference),
            Message::FavoriteAlreadyExists(reference) => format!("{} is already a favorite", reference),
            Message::FavoriteRemoved => "Favorite removed".to_string(),
            Message::FavoriteNotFound(id) => format!("Favorite not found: {}", id),
            Message::FavoriteTagsUpdated => "Favorite tags updated".to_string(),
            Message::FavoritesCleared => "All favorites removed".to_string(),
            Message::NoFavorites => "No favorites yet".to_string(),
            Message::FavoriteSaveFailed(error) => format!("Could not save the favorite: {}", error),

            // === NOTE MESSAGES ===
            Message::NoteAdded(title) => format!("Note '{}' saved", title),
            Message::NoteUpdated => "Note updated".to_string(),
            Message::NoteRemoved => "Note removed".to_string(),
            Message::NoteNotFound(id) => format!("Note not found: {}", id),
            Message::NotesCleared => "All notes removed".to_string(),
            Message::NoNotes => "No notes yet".to_string(),
            Message::NoteSaveFailed(error) => format!("Could not save the note: {}", error),

            // === PLAN MESSAGES ===
            Message::PlanAdded(title) => format!("Reading plan '{}' created", title),
            Message::PlanActivated(title) => format!("Reading plan '{}' is now active", title),
            Message::PlanProgressUpdated(title, progress) => format!("'{}' progress: {}%", title, progress),
            Message::PlanRemoved => "Reading plan removed".to_string(),
            Message::PlanNotFound(id) => format!("Reading plan not found: {}", id),
            Message::PlansCleared => "All reading plans removed".to_string(),
            Message::NoPlans => "No reading plans yet".to_string(),
            Message::PlanSaveFailed(error) => format!("Could not save the reading plan: {}", error),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader => "🕘 Reading history".to_string(),
            Message::HistoryItemRemoved => "History entry removed".to_string(),
            Message::HistoryItemNotFound(id) => format!("History entry not found: {}", id),
            Message::HistoryCleared => "Reading history cleared".to_string(),
            Message::NoHistory => "No reading history yet".to_string(),
            Message::HistoryRecordFailed(error) => format!("Failed to record reading: {}", error),

            // === STATS MESSAGES ===
            Message::StatsHeader => "📊 Reading statistics".to_string(),
            Message::StatsReset => "Statistics reset".to_string(),
            Message::NoStats => "No statistics yet. Start reading to see your progress".to_string(),
            Message::MotivationGreatStreak => "Amazing streak! Keep reading every day.".to_string(),
            Message::MotivationGreatProgress => "Great progress! You have read a lot.".to_string(),
            Message::MotivationKeepGoing => "Good work! Keep up your daily reading.".to_string(),
            Message::MotivationStart => "Start your journey through the Bible today!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDatabaseSet(path) => format!("Bible database set to {}", path),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),

            // === PROMPTS ===
            Message::ConfirmClearHistory => "Clear the whole reading history and statistics?".to_string(),
            Message::ConfirmClearFavorites => "Remove all favorites?".to_string(),
            Message::ConfirmClearNotes => "Remove all notes?".to_string(),
            Message::ConfirmClearPlans => "Remove all reading plans?".to_string(),
            Message::ConfirmResetStats => "Reset reading statistics?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
