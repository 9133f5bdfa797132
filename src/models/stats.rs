use crate::models::user::User;
use serde::Serialize;

/// Figures derived from the current user list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub count: usize,
    /// Mean given name length in characters, None for an empty list
    pub avg_given_name_length: Option<f64>,
    /// Mean family name length in characters, None for an empty list
    pub avg_family_name_length: Option<f64>,
    pub min_id: Option<u64>,
    pub max_id: Option<u64>,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        let count = users.len();

        let average = |total: usize| {
            if count == 0 {
                None
            } else {
                Some(total as f64 / count as f64)
            }
        };

        let given_total: usize = users.iter().map(|u| u.given_name().chars().count()).sum();
        let family_total: usize = users.iter().map(|u| u.family_name().chars().count()).sum();

        Self {
            count,
            avg_given_name_length: average(given_total),
            avg_family_name_length: average(family_total),
            min_id: users.iter().map(User::id).min(),
            max_id: users.iter().map(User::id).max(),
        }
    }
}

/// Format an average with two decimals, "-" when absent
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}
