#[cfg(test)]
mod tests {
    use std::fs;
    use taskdeck::libs::cache::Cache;
    use taskdeck::libs::data_storage::DataStorage;
    use taskdeck::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CacheTestContext {
        _temp_dir: TempDir,
        cache: Cache,
    }

    impl TestContext for CacheTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let cache = Cache::at(temp_dir.path().join("todos.json"));
            CacheTestContext {
                _temp_dir: temp_dir,
                cache,
            }
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            Task::new(3, "Newest", 1),
            Task {
                user_id: 1,
                id: 1,
                title: "Done already".to_string(),
                completed: true,
            },
            Task::new(2, "Ünïcödé ✓", 1),
        ]
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_missing_slot_is_absent(ctx: &mut CacheTestContext) {
        assert!(ctx.cache.load().is_none());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_round_trip_preserves_order_and_fields(ctx: &mut CacheTestContext) {
        let tasks = sample();
        ctx.cache.save(&tasks).unwrap();

        assert_eq!(ctx.cache.load(), Some(tasks.clone()));

        // Saving what was loaded changes nothing
        let reloaded = ctx.cache.load().unwrap();
        ctx.cache.save(&reloaded).unwrap();
        assert_eq!(ctx.cache.load(), Some(tasks));
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_empty_collection_round_trips(ctx: &mut CacheTestContext) {
        ctx.cache.save(&[]).unwrap();
        assert_eq!(ctx.cache.load(), Some(Vec::new()));
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_malformed_slot_is_absent(ctx: &mut CacheTestContext) {
        fs::write(ctx.cache.path(), "[{\"id\": \"not a number\"}]").unwrap();
        assert!(ctx.cache.load().is_none());

        fs::write(ctx.cache.path(), "").unwrap();
        assert!(ctx.cache.load().is_none());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_slot_uses_remote_field_names(ctx: &mut CacheTestContext) {
        ctx.cache.save(&[Task::new(1, "A", 1)]).unwrap();
        let raw = fs::read_to_string(ctx.cache.path()).unwrap();
        assert_eq!(raw, r#"[{"userId":1,"id":1,"title":"A","completed":false}]"#);
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_clear_removes_slot(ctx: &mut CacheTestContext) {
        ctx.cache.save(&sample()).unwrap();
        ctx.cache.clear().unwrap();
        assert!(ctx.cache.load().is_none());

        // Clearing twice is fine
        ctx.cache.clear().unwrap();
    }

    #[test]
    fn test_data_storage_creates_base_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join("taskdeck");
        let storage = DataStorage::with_base(&base);

        let path = storage.get_path("todos.json").unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("todos.json"));
    }
}
