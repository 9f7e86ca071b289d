use crate::adapters::FsStore;
use crate::config::AppConfig;
use crate::types::subscription::Subscription;
use crate::types::theme::Theme;

use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: FsStore,
    pub subscriptions: Arc<Mutex<Vec<Subscription>>>,
    pub theme: Arc<Mutex<Theme>>,
}
