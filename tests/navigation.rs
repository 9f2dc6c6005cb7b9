mod common;

#[cfg(test)]
mod tests {
    use super::common::{self, CANON, TOTAL_CHAPTERS};
    use biblia::db::books::Books;
    use biblia::libs::bible::ChapterPosition;
    use biblia::libs::navigation::{next_chapter, previous_chapter, step, CountTable, Direction};

    fn canon_counts() -> CountTable {
        CountTable::new(CANON.iter().map(|(_, _, chapters)| *chapters).collect())
    }

    #[test]
    fn test_next_within_book() {
        let counts = canon_counts();
        assert_eq!(next_chapter(&counts, ChapterPosition::new(1, 1)).unwrap(), Some(ChapterPosition::new(1, 2)));
    }

    #[test]
    fn test_next_crosses_book_boundary() {
        let counts = canon_counts();
        assert_eq!(next_chapter(&counts, ChapterPosition::new(1, 50)).unwrap(), Some(ChapterPosition::new(2, 1)));
        assert_eq!(next_chapter(&counts, ChapterPosition::new(39, 4)).unwrap(), Some(ChapterPosition::new(40, 1)));
    }

    #[test]
    fn test_previous_crosses_book_boundary() {
        let counts = canon_counts();
        assert_eq!(previous_chapter(&counts, ChapterPosition::new(2, 1)).unwrap(), Some(ChapterPosition::new(1, 50)));
        assert_eq!(previous_chapter(&counts, ChapterPosition::new(20, 1)).unwrap(), Some(ChapterPosition::new(19, 150)));
    }

    #[test]
    fn test_canon_ends() {
        let counts = canon_counts();
        assert_eq!(previous_chapter(&counts, ChapterPosition::start()).unwrap(), None);
        assert_eq!(next_chapter(&counts, ChapterPosition::new(66, 22)).unwrap(), None);
    }

    #[test]
    fn test_single_chapter_books() {
        let counts = canon_counts();
        // 3 Juan and Judas have one chapter each
        assert_eq!(step(&counts, ChapterPosition::new(65, 1), Direction::Next).unwrap(), Some(ChapterPosition::new(66, 1)));
        assert_eq!(step(&counts, ChapterPosition::new(65, 1), Direction::Previous).unwrap(), Some(ChapterPosition::new(64, 1)));
    }

    #[test]
    fn test_walk_forward_visits_every_chapter_in_order() {
        let counts = canon_counts();
        assert_eq!(counts.total(), TOTAL_CHAPTERS);

        let mut position = ChapterPosition::start();
        let mut visited = 1;
        while let Some(next) = next_chapter(&counts, position).unwrap() {
            assert!(next > position);
            position = next;
            visited += 1;
        }
        assert_eq!(visited, TOTAL_CHAPTERS);
        assert_eq!(position, ChapterPosition::new(66, 22));
    }

    #[test]
    fn test_previous_undoes_next() {
        let counts = canon_counts();
        let mut position = ChapterPosition::start();
        while let Some(next) = next_chapter(&counts, position).unwrap() {
            assert_eq!(previous_chapter(&counts, next).unwrap(), Some(position));
            position = next;
        }
    }

    #[test]
    fn test_unknown_book_is_not_found() {
        let counts = canon_counts();
        assert!(next_chapter(&counts, ChapterPosition::new(67, 1)).unwrap_err().is_not_found());
        assert!(previous_chapter(&counts, ChapterPosition::new(68, 1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_store_and_table_agree() {
        let store = common::memory_store();
        let books = Books::new(&store).list().unwrap();
        let table = CountTable::from_books(&books);
        assert_eq!(table, canon_counts());

        for position in [ChapterPosition::new(1, 50), ChapterPosition::new(19, 150), ChapterPosition::new(43, 21)] {
            assert_eq!(next_chapter(&store, position).unwrap(), next_chapter(&table, position).unwrap());
            assert_eq!(previous_chapter(&store, position).unwrap(), previous_chapter(&table, position).unwrap());
        }
    }
}
