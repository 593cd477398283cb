use std::sync::Arc;

use catalog::Catalog;

use crate::config::Config;

/// Shared, read-only application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
