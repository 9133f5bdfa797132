// Application state (AppState)

use crate::core::config::Config;
use crate::stores::user_list::UserList;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// The user list and its id counter sit behind one lock, so every
/// operation runs to completion before another can observe the list.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<UserList>>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let users = UserList::with_capacity(config.directory.initial_capacity);

        Self {
            users: Arc::new(RwLock::new(users)),
            config: Arc::new(config),
        }
    }
}
