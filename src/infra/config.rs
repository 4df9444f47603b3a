use std::fs;
use std::path::Path;

use log::info;

use crate::domain::table::{ConfigError, TableConfig};

/// Переменная окружения с путём к JSON-конфигу стола.
pub const TABLE_CONFIG_ENV: &str = "HOLDEM_TABLE_CONFIG";

/// Прочитать конфиг стола из JSON-файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let config = TableConfig::from_json_str(&raw)?;
    info!("table config loaded from {}", path.display());
    Ok(config)
}

/// Конфиг из `HOLDEM_TABLE_CONFIG`, если переменная задана, иначе – по умолчанию.
pub fn table_config_from_env() -> Result<TableConfig, ConfigError> {
    match std::env::var_os(TABLE_CONFIG_ENV) {
        Some(path) => load_table_config(path),
        None => Ok(TableConfig::default()),
    }
}
