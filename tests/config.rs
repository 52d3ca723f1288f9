#[cfg(test)]
mod tests {
    use chronos::libs::config::{Config, DatabaseConfig, ServerConfig, UserConfig, CONFIG_FILE_NAME};
    use chronos::libs::data_storage::DataStorage;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigContext { temp_dir, path }
        }
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigContext) {
        let config = Config::read_from(&ctx.path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.employee_id(), None);
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigContext) {
        let config = Config {
            user: Some(UserConfig { employee_id: 2 }),
            server: Some(ServerConfig {
                api_url: "https://chronos.example.com/api".to_string(),
                auth_token: "token".to_string(),
            }),
            database: Some(DatabaseConfig {
                path: PathBuf::from("/tmp/chronos.db"),
            }),
        };

        config.save_to(&ctx.path).unwrap();
        let read = Config::read_from(&ctx.path).unwrap();

        assert_eq!(read, config);
        assert_eq!(read.employee_id(), Some(2));
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_partial_file(ctx: &mut ConfigContext) {
        fs::write(&ctx.path, r#"{ "user": { "employee_id": 5 } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.employee_id(), Some(5));
        assert!(config.server.is_none());
        assert!(config.database.is_none());
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigContext) {
        fs::write(&ctx.path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigContext)]
    #[test]
    fn test_storage_creates_its_directory(ctx: &mut ConfigContext) {
        let base = ctx.temp_dir.path().join("nested").join("chronos");
        let path = DataStorage::at(&base).get_path(CONFIG_FILE_NAME).unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("config.json"));
    }
}
