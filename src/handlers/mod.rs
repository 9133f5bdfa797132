pub mod fallback;
pub mod health;
pub mod stats;
pub mod users;
