use crate::counter::CounterStore;
use crate::effects::Effects;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<CounterStore>>,
    pub effects: Arc<dyn Effects>,
    pub public_url: Arc<str>,
}

impl AppState {
    pub fn new(store: CounterStore, effects: Arc<dyn Effects>, public_url: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            effects,
            public_url: public_url.into(),
        }
    }
}
