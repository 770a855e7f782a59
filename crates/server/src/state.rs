use domain::Clock;
use std::sync::Arc;
use storage::CommentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn CommentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
