/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === VERSE STORE MESSAGES ===
    DatabaseUnavailable(String), // reason
    DatabaseOpened(String),      // path
    BookNotFound(String),        // id, name or abbreviation
    ChapterNotFound(String),     // reference
    VerseNotFound(String),       // reference
    LoadChapterFailed(String),   // error
    BooksHeader,
    BookChaptersHeader(String, usize), // book name, chapter count

    // === READING MESSAGES ===
    ChapterHeader(String), // title
    AtFirstChapter,
    AtLastChapter,
    NothingReadYet,
    PagerPrompt,
    PagerUnknownKey(String),

    // === SEARCH MESSAGES ===
    SearchTooShort(usize), // minimum characters
    SearchNoResults(String),
    SearchResultsCount(usize),

    // === FAVORITE MESSAGES ===
    FavoriteAdded(String), // reference
    FavoriteAlreadyExists(String),
    FavoriteRemoved,
    FavoriteNotFound(String), // id
    FavoriteTagsUpdated,
    FavoritesCleared,
    NoFavorites,
    FavoriteSaveFailed(String), // error

    // === NOTE MESSAGES ===
    NoteAdded(String), // title
    NoteUpdated,
    NoteRemoved,
    NoteNotFound(String), // id
    NotesCleared,
    NoNotes,
    NoteSaveFailed(String), // error

    // === PLAN MESSAGES ===
    PlanAdded(String), // title
    PlanActivated(String),
    PlanProgressUpdated(String, u8),
    PlanRemoved,
    PlanNotFound(String), // id
    PlansCleared,
    NoPlans,
    PlanSaveFailed(String), // error

    // === HISTORY MESSAGES ===
    HistoryHeader,
    HistoryItemRemoved,
    HistoryItemNotFound(String), // id
    HistoryCleared,
    NoHistory,
    HistoryRecordFailed(String), // error

    // === STATS MESSAGES ===
    StatsHeader,
    StatsReset,
    NoStats,
    MotivationGreatStreak,
    MotivationGreatProgress,
    MotivationKeepGoing,
    MotivationStart,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDatabaseSet(String), // path
    ConfigParseError,

    // === PROMPTS ===
    ConfirmClearHistory,
    ConfirmClearFavorites,
    ConfirmClearNotes,
    ConfirmClearPlans,
    ConfirmResetStats,
    OperationCancelled,
}
