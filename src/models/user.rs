use crate::core::error::ValidationError;
use crate::stores::id_counter::IdCounter;
use crate::utils::time::current_timestamp_millis;
use crate::validation::names::validate_names;
use serde::Serialize;

/// A single directory entry.
///
/// The id is the user's identity, not their position in any list.
/// Name fields can only be changed through [`crate::stores::user_list::UserList::edit_user`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    id: u64,
    given_name: String,
    family_name: String,
    user_name: String,
    /// Unix timestamp in milliseconds
    creation_time: i64,
}

impl User {
    /// Validate the names, then take the next id from `counter`.
    ///
    /// A rejected construction does not consume an id. Fails with
    /// `IdsExhausted` once the counter has run out.
    pub fn new(
        counter: &mut IdCounter,
        given_name: &str,
        family_name: &str,
        user_name: &str,
    ) -> Result<Self, ValidationError> {
        validate_names(given_name, family_name, user_name)?;

        Ok(Self {
            id: counter.next_id()?,
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            user_name: user_name.to_string(),
            creation_time: current_timestamp_millis(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn creation_time(&self) -> i64 {
        self.creation_time
    }

    pub(crate) fn set_names(&mut self, given_name: &str, family_name: &str, user_name: &str) {
        self.given_name = given_name.to_string();
        self.family_name = family_name.to_string();
        self.user_name = user_name.to_string();
    }
}
