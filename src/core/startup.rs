// Startup helpers

use crate::core::state::AppState;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Users added when `directory.seed_demo_users` is set
pub const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("Samuel", "Schepp", "samuel56"),
    ("Kevin", "Linne", "linne465"),
    ("Peter", "Kneisel", "peter_kneisel"),
];

/// Add the demo users to the list. Returns how many were added.
pub async fn seed_demo_users(state: &AppState) -> Result<usize> {
    let mut users = state.users.write().await;

    for (given_name, family_name, user_name) in DEMO_USERS {
        let user = users
            .create_user(given_name, family_name, user_name)
            .context(format!("Failed to create demo user '{}'", user_name))?;

        debug!(user_id = user.id(), user_name = %user.user_name(), "Demo user added");
        users.add_user(user);
    }

    info!(users = users.len(), "Demo users seeded");

    Ok(DEMO_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[tokio::test]
    async fn test_seed_demo_users() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        let state = AppState::new(config);

        let added = seed_demo_users(&state).await.unwrap();
        assert_eq!(added, 3);

        let users = state.users.read().await;
        let names: Vec<(u64, &str)> = users
            .get_users()
            .iter()
            .map(|u| (u.id(), u.user_name()))
            .collect();
        assert_eq!(
            names,
            vec![(1, "samuel56"), (2, "linne465"), (3, "peter_kneisel")]
        );
    }
}
