use crate::error::{CardsError, Result};
use directories::BaseDirs;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DB_DIR_ENV: &str = "CARDS_DB_DIR";
pub const TABLE_FORMAT_ENV: &str = "CARDSTABLEFORMAT";
pub const DB_FILENAME: &str = ".cards_db.json";

/// How `list` lays out its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Header, dashed rule, rows
    #[default]
    Simple,
    /// Header and rows, no rule
    Plain,
}

impl FromStr for TableFormat {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(TableFormat::Simple),
            "plain" => Ok(TableFormat::Plain),
            other => Err(CardsError::Validation(format!(
                "unknown table format '{}' (expected simple or plain)",
                other
            ))),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Simple => f.write_str("simple"),
            TableFormat::Plain => f.write_str("plain"),
        }
    }
}

/// Runtime configuration, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardsConfig {
    /// Directory holding the database file
    pub db_dir: PathBuf,
    pub table_format: TableFormat,
}

impl CardsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup` instead of the process environment.
    ///
    /// Unset and empty variables are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let db_dir = var(DB_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_db_dir);
        let table_format = match var(TABLE_FORMAT_ENV) {
            Some(value) => value.parse()?,
            None => TableFormat::default(),
        };

        Ok(Self {
            db_dir,
            table_format,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(DB_FILENAME)
    }
}

fn default_db_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn db_dir_comes_from_the_environment() {
        let config = CardsConfig::from_lookup(lookup(&[(DB_DIR_ENV, "/tmp/cards")])).unwrap();
        assert_eq!(config.db_dir, PathBuf::from("/tmp/cards"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/cards/.cards_db.json"));
    }

    #[test]
    fn unset_or_empty_db_dir_falls_back_to_home() {
        let unset = CardsConfig::from_lookup(lookup(&[])).unwrap();
        let empty = CardsConfig::from_lookup(lookup(&[(DB_DIR_ENV, "")])).unwrap();
        assert_eq!(unset.db_dir, default_db_dir());
        assert_eq!(empty.db_dir, default_db_dir());
    }

    #[test]
    fn table_format_defaults_to_simple() {
        let config = CardsConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.table_format, TableFormat::Simple);
    }

    #[test]
    fn table_format_is_parsed() {
        let config = CardsConfig::from_lookup(lookup(&[(TABLE_FORMAT_ENV, "Plain")])).unwrap();
        assert_eq!(config.table_format, TableFormat::Plain);
    }

    #[test]
    fn unknown_table_format_is_rejected() {
        let err = CardsConfig::from_lookup(lookup(&[(TABLE_FORMAT_ENV, "grid")])).unwrap_err();
        assert!(matches!(err, CardsError::Validation(_)));
    }
}
