#[cfg(test)]
mod tests {
    use chronos::db::db::Db;
    use chronos::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for MigrationContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("chronos.db");
            MigrationContext { _temp_dir: temp_dir, path }
        }
    }

    fn table_exists(db: &Db, name: &str) -> bool {
        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [name], |row| row.get(0))
            .unwrap();
        count == 1
    }

    #[test_context(MigrationContext)]
    #[test]
    fn test_fresh_database_is_behind(ctx: &mut MigrationContext) {
        let db = Db::open_without_migrations(&ctx.path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 0);
        assert!(needs_migration(&db.conn).unwrap());
        assert!(!table_exists(&db, "clockings"));
    }

    #[test_context(MigrationContext)]
    #[test]
    fn test_open_applies_every_migration(ctx: &mut MigrationContext) {
        let db = Db::open(&ctx.path).unwrap();
        let manager = MigrationManager::new();

        assert_eq!(get_db_version(&db.conn).unwrap(), manager.latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
        for table in ["employees", "clockings", "monthly_hours_config", "monthly_closures", "monthly_closure_details"] {
            assert!(table_exists(&db, table), "missing table {}", table);
        }

        let history = manager.get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len() as u32, manager.latest_version());
        assert_eq!(history[0].0, 1);
        assert!(manager.is_migration_applied(&db.conn, 3).unwrap());
    }

    #[test_context(MigrationContext)]
    #[test]
    fn test_reopening_is_idempotent(ctx: &mut MigrationContext) {
        drop(Db::open(&ctx.path).unwrap());
        let db = Db::open(&ctx.path).unwrap();

        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len() as u32, MigrationManager::new().latest_version());
    }

    #[test_context(MigrationContext)]
    #[test]
    fn test_allowance_table_enforces_its_range(ctx: &mut MigrationContext) {
        let db = Db::open(&ctx.path).unwrap();

        let too_many = db.conn.execute(
            "INSERT INTO monthly_hours_config (id, monthly_hours, updated_at, updated_by) VALUES (1, 800, '2025-03-01', 'x')",
            [],
        );
        assert!(too_many.is_err());

        let second_row = db.conn.execute(
            "INSERT INTO monthly_hours_config (id, monthly_hours, updated_at, updated_by) VALUES (2, 160, '2025-03-01', 'x')",
            [],
        );
        assert!(second_row.is_err());
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationContext)]
    #[test]
    fn test_rollback_forgets_newer_versions(ctx: &mut MigrationContext) {
        let mut db = Db::open(&ctx.path).unwrap();
        let manager = MigrationManager::new();

        manager.rollback_to(&mut db.conn, 2).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(needs_migration(&db.conn).unwrap());
    }
}
