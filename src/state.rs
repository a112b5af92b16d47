use crate::{config, store::CustomerStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(config: config::Config, store: Arc<dyn CustomerStore>) -> Self {
        Self { config, store }
    }
}
