pub mod api;
pub mod stats;
pub mod user;
