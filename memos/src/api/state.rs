use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::llm::{LlmProvider, TextGenerator};
use crate::services::{GenerationService, MemoService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub llm: LlmProvider,
    pub memos: MemoService,
    pub generation: GenerationService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(llm.clone());
        Self::with_generator(config, db, llm, generator)
    }

    /// Build state around an explicit generator, e.g. a stub in tests.
    pub fn with_generator(
        config: Config,
        db: Arc<dyn DatabaseBackend>,
        llm: LlmProvider,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let memos = MemoService::new(db.clone());
        let generation = GenerationService::new(generator, db.clone());

        Self {
            config: Arc::new(config),
            db,
            llm,
            memos,
            generation,
        }
    }
}
