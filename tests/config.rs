#[cfg(test)]
mod tests {
    use biblia::libs::config::{Config, SearchConfig, CONFIG_FILE_NAME, DB_PATH_ENV};
    use biblia::libs::data_storage::{DataStorage, APP_NAME, DATA_DIR_ENV};
    use biblia::libs::kv::{FileStore, KeyValueStore, StorageError};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::remove_var(DB_PATH_ENV);
            let storage = DataStorage::at(temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search, SearchConfig { min_chars: 3, limit: 50 });
        assert_eq!(config.recent_history, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.database = Some(PathBuf::from("/opt/biblia/rv1960.db"));
        config.search.limit = 20;
        config.save_to(&ctx.storage).unwrap();

        let read = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, r#"{"search": {"limit": 7}}"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config.search.limit, 7);
        assert_eq!(config.search.min_chars, 3);
        assert_eq!(config.database, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "search = 3").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        let default_path = config.database_path(&ctx.storage).unwrap();
        assert!(default_path.ends_with("biblia-rv-1960.db"));
        assert!(default_path.starts_with(ctx.storage.base_path()));

        config.database = Some(PathBuf::from("custom.db"));
        assert_eq!(config.database_path(&ctx.storage).unwrap(), PathBuf::from("custom.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_file_store_keys(ctx: &mut ConfigTestContext) {
        let store = FileStore::new(ctx.storage.base_path());
        store.set("@biblia_app_notes", "[]").unwrap();
        assert!(ctx.storage.base_path().join("biblia_app_notes.json").exists());
        assert_eq!(store.get("@biblia_app_notes").unwrap().as_deref(), Some("[]"));

        store.remove("@biblia_app_notes").unwrap();
        assert_eq!(store.get("@biblia_app_notes").unwrap(), None);
        // removing a missing key is fine
        store.remove("@biblia_app_notes").unwrap();

        assert!(matches!(store.set("@/..", "x"), Err(StorageError::InvalidKey { .. })));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_directory_override(ctx: &mut ConfigTestContext) {
        std::env::set_var(DATA_DIR_ENV, ctx.storage.base_path());
        assert_eq!(DataStorage::new().base_path(), ctx.storage.base_path());

        // an empty override falls back to the platform directory
        std::env::set_var(DATA_DIR_ENV, "");
        let platform = DataStorage::new();
        std::env::remove_var(DATA_DIR_ENV);
        assert!(platform.base_path().ends_with(APP_NAME));
        assert_ne!(platform.base_path(), ctx.storage.base_path());
    }
}
