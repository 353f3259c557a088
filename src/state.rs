use std::sync::Arc;

use super::{config::Config, store::CandidateStore};

pub struct State {
    pub config: Config,
    pub store: CandidateStore,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let store = CandidateStore::new(config.data_path.clone(), config.cache_ttl);

        Arc::new(Self { config, store })
    }
}
