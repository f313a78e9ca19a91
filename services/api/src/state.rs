use crate::rate_limit::TokenBucket;
use nepse::Nepse;
use std::sync::Arc;

/// Shared handles every handler receives through axum state.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<Nepse>,
    pub bucket: Arc<TokenBucket>,
}

impl AppState {
    pub fn new(client: Nepse, bucket: TokenBucket) -> Self {
        Self {
            client: Arc::new(client),
            bucket: Arc::new(bucket),
        }
    }
}
