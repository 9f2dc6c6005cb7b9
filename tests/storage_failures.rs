mod common;

#[cfg(test)]
mod tests {
    use super::common::FailingStore;
    use biblia::libs::favorites::{FavoriteVerse, Favorites, FAVORITES_KEY};
    use biblia::libs::history::{ReadingHistory, HISTORY_KEY, STATS_KEY};
    use biblia::libs::kv::KeyValueStore;
    use biblia::libs::notes::{Note, NotePatch, Notes};
    use biblia::libs::plans::{PlanKind, Plans, ReadingPlan};
    use biblia::libs::stats::MINUTES_PER_READING;
    use chrono::{DateTime, Local, NaiveDate, TimeZone};
    use std::sync::Arc;
    use test_context::{test_context, TestContext};

    struct FailingStoreContext {
        kv: Arc<FailingStore>,
    }

    impl TestContext for FailingStoreContext {
        fn setup() -> Self {
            FailingStoreContext { kv: FailingStore::new() }
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, day, hour, 0, 0).single().unwrap()
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_favorite_add_is_not_applied(ctx: &mut FailingStoreContext) {
        let mut favorites = Favorites::new(ctx.kv.shared()).unwrap();
        ctx.kv.fail_writes();
        assert!(favorites.add(FavoriteVerse::new("Juan", 3, 16, "texto")).is_err());
        assert!(favorites.all().is_empty());
        assert!(!favorites.is_favorite("Juan", 3, 16));

        ctx.kv.recover();
        assert!(favorites.add(FavoriteVerse::new("Juan", 3, 16, "texto")).unwrap());
        assert_eq!(Favorites::new(ctx.kv.shared()).unwrap().all().len(), 1);
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_favorite_edits_keep_previous_state(ctx: &mut FailingStoreContext) {
        let mut favorites = Favorites::new(ctx.kv.shared()).unwrap();
        favorites.add(FavoriteVerse::new("Juan", 3, 16, "texto")).unwrap();
        let id = favorites.all()[0].id.clone();

        ctx.kv.fail_writes_to(FAVORITES_KEY);
        assert!(favorites.update_tags(&id, vec!["amor".to_string()]).is_err());
        assert!(favorites.remove(&id).is_err());
        assert!(favorites.clear().is_err());

        let favorite = favorites.get(&id).unwrap();
        assert_eq!(favorite.tags, None);
        assert_eq!(favorites.all(), Favorites::new(ctx.kv.shared()).unwrap().all());
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_note_update_leaves_note_untouched(ctx: &mut FailingStoreContext) {
        let mut notes = Notes::new(ctx.kv.shared()).unwrap();
        notes.add(Note::new("Gracia", "Efesios 2")).unwrap();
        let id = notes.all()[0].id.clone();

        ctx.kv.fail_writes();
        let patch = NotePatch {
            title: Some("Fe".to_string()),
            ..Default::default()
        };
        assert!(notes.update(&id, patch).is_err());
        assert!(notes.add(Note::new("Paz", "Juan 14")).is_err());

        assert_eq!(notes.all().len(), 1);
        assert_eq!(notes.get(&id).unwrap().title, "Gracia");
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_activation_keeps_previous_active_plan(ctx: &mut FailingStoreContext) {
        let mut plans = Plans::new(ctx.kv.shared()).unwrap();
        plans.add(ReadingPlan::new("Biblia en un año", "", "365 días", PlanKind::Daily)).unwrap();
        plans.add(ReadingPlan::new("Evangelios", "", "4 semanas", PlanKind::Weekly)).unwrap();
        let first = plans.all()[1].id.clone();
        let second = plans.all()[0].id.clone();
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(plans.activate_on(&first, day).unwrap());

        ctx.kv.fail_writes();
        assert!(plans.activate_on(&second, day).is_err());
        assert!(plans.remove(&first).is_err());

        assert_eq!(plans.active().unwrap().id, first);
        assert!(plans.get(&second).unwrap().start_date.is_none());
        assert_eq!(plans.all().len(), 2);
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_record_is_not_resurrected(ctx: &mut FailingStoreContext) {
        let mut history = ReadingHistory::new(ctx.kv.shared()).unwrap();
        ctx.kv.fail_writes();
        assert!(history.record_at(43, "Juan", 3, Some(16), at(10, 8)).is_err());
        assert!(history.list().is_empty());

        ctx.kv.recover();
        history.record_at(1, "Génesis", 1, Some(31), at(10, 9)).unwrap();

        let reloaded = ReadingHistory::new(ctx.kv.shared()).unwrap();
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.latest().unwrap().book_id, 1);
        let stats = reloaded.stats();
        assert_eq!(stats.total_readings, 1);
        assert_eq!(stats.total_time_minutes, MINUTES_PER_READING);
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_stats_write_rolls_back_history(ctx: &mut FailingStoreContext) {
        let mut history = ReadingHistory::new(ctx.kv.shared()).unwrap();
        history.record_at(1, "Génesis", 1, Some(31), at(10, 8)).unwrap();

        ctx.kv.fail_writes_to(STATS_KEY);
        assert!(history.record_at(43, "Juan", 3, Some(16), at(10, 9)).is_err());
        assert_eq!(history.list().len(), 1);
        assert_eq!(ReadingHistory::new(ctx.kv.shared()).unwrap().list().len(), 1);
        assert_eq!(history.stats().total_readings, 1);

        ctx.kv.recover();
        history.record_at(43, "Juan", 3, Some(16), at(10, 10)).unwrap();
        assert_eq!(history.stats().total_readings, 2);
        assert_eq!(history.stats().total_time_minutes, 2 * MINUTES_PER_READING);
    }

    #[test_context(FailingStoreContext)]
    #[test]
    fn test_failed_history_remove_keeps_entry(ctx: &mut FailingStoreContext) {
        let mut history = ReadingHistory::new(ctx.kv.shared()).unwrap();
        let item = history.record_at(43, "Juan", 3, None, at(10, 8)).unwrap();

        ctx.kv.fail_writes_to(HISTORY_KEY);
        assert!(history.remove(&item.id).is_err());
        assert_eq!(history.latest().unwrap().id, item.id);
        assert!(ctx.kv.get(HISTORY_KEY).unwrap().unwrap().contains(&item.id));
    }
}
