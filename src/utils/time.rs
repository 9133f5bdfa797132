use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time since the Unix epoch; zero if the clock reads earlier than that
fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Unix time in seconds
pub fn current_timestamp() -> i64 {
    since_epoch().as_secs() as i64
}

/// Unix time in milliseconds, the resolution of `User::creation_time`
pub fn current_timestamp_millis() -> i64 {
    since_epoch().as_millis() as i64
}
