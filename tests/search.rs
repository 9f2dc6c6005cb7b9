mod common;

#[cfg(test)]
mod tests {
    use super::common::{self, JUAN, JUAN_3_16};
    use biblia::db::verses::Verses;
    use biblia::libs::config::SearchConfig;
    use biblia::libs::search::{is_searchable, search, SearchOutcome};

    #[test]
    fn test_short_terms_are_not_searched() {
        let store = common::memory_store();
        let config = SearchConfig::default();

        assert!(!is_searchable("  ab  ", &config));
        assert!(is_searchable("amó", &config));
        assert_eq!(search(&store, "ab", &config).unwrap(), SearchOutcome::NotSearched);
        assert!(SearchOutcome::NotSearched.results().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered_by_length() {
        let store = common::memory_store();
        let outcome = search(&store, "amor", &SearchConfig::default()).unwrap();
        let references: Vec<(u32, u32, u32)> = outcome.results().iter().map(|r| (r.book_id, r.chapter, r.verse)).collect();

        // the shorter verse comes first
        assert_eq!(references, vec![(46, 13, 3), (62, 4, 8)]);
        assert_eq!(outcome.results()[0].book, "1 Corintios");
    }

    #[test]
    fn test_search_respects_limit() {
        let store = common::memory_store();
        let config = SearchConfig { min_chars: 3, limit: 5 };
        let outcome = search(&store, "texto de", &config).unwrap();
        assert_eq!(outcome.results().len(), 5);
    }

    #[test]
    fn test_search_finds_phrase() {
        let store = common::memory_store();
        let results = Verses::new(&store).search("tal manera", 50).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].book_id, JUAN);
        assert_eq!(results[0].text, JUAN_3_16);
    }

    #[test]
    fn test_search_without_match() {
        let store = common::memory_store();
        let outcome = search(&store, "zzzz", &SearchConfig::default()).unwrap();
        assert_eq!(outcome, SearchOutcome::Results(vec![]));
    }
}
