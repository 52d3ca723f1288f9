use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "chronos.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database, or the default one in the data directory.
    pub fn new() -> Result<Db> {
        Self::open(&Self::default_path()?)
    }

    /// Opens the database at `path` and brings its schema up to date.
    pub fn open(path: &Path) -> Result<Db> {
        let mut db = Self::open_without_migrations(path)?;
        init_with_migrations(&mut db.conn)?;
        Ok(db)
    }

    pub fn open_without_migrations(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Db { conn })
    }

    pub fn default_path() -> Result<PathBuf> {
        match Config::read()?.database {
            Some(database) => Ok(database.path),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
