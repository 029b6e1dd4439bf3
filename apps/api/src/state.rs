use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::JobRequirements;
use crate::candidates::pool::CandidatePool;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Requirements set through the setup endpoint; used when a request brings none.
    pub requirements: Arc<RwLock<Option<JobRequirements>>>,
    /// Every result analyzed or loaded during this session.
    pub pool: Arc<RwLock<CandidatePool>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            requirements: Arc::new(RwLock::new(None)),
            pool: Arc::new(RwLock::new(CandidatePool::new())),
        }
    }
}
