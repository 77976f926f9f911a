use crate::api::CardsApi;
use crate::config::CardsConfig;
use crate::error::Result;
use crate::store::fs::FileStore;

pub struct CardsContext {
    pub api: CardsApi<FileStore>,
    pub config: CardsConfig,
}

/// Opens the database described by `config`, creating it if needed.
pub fn initialize(config: CardsConfig) -> Result<CardsContext> {
    let store = FileStore::open(config.db_path())?;
    let api = CardsApi::new(store, config.db_dir.clone());
    Ok(CardsContext { api, config })
}
