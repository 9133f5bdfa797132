use crate::core::error::ValidationError;
use crate::models::user::User;
use crate::stores::id_counter::IdCounter;

/// Ordered in-memory list of users
///
/// Insertion order is display order. Lookups are linear scans by id.
/// The list owns the id counter, so every user it creates gets a fresh id.
#[derive(Debug)]
pub struct UserList {
    users: Vec<User>,
    counter: IdCounter,
}

impl UserList {
    /// Create an empty UserList
    pub fn new() -> Self {
        Self::with_counter(IdCounter::new(), 0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_counter(IdCounter::new(), capacity)
    }

    /// Create an empty UserList that allocates ids from `counter`
    pub fn with_counter(counter: IdCounter, capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
            counter,
        }
    }

    /// Construct a user with the next id from this list's counter.
    /// The user is not added; pass it to `add_user`.
    pub fn create_user(
        &mut self,
        given_name: &str,
        family_name: &str,
        user_name: &str,
    ) -> Result<User, ValidationError> {
        User::new(&mut self.counter, given_name, family_name, user_name)
    }

    /// All users in insertion order
    pub fn get_users(&self) -> &[User] {
        &self.users
    }

    /// Append a user to the end of the list
    /// No duplicate id check is done; ids are unique by construction
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove the user with the given id
    /// Returns true if the user was found and removed
    pub fn delete_user(&mut self, user_id: u64) -> bool {
        match self.position(user_id) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    /// Get a user by id
    pub fn get_user(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id() == user_id)
    }

    /// Overwrite the three name fields of the user with the given id.
    /// Id and creation time never change.
    /// Returns false, touching nothing, if no user has this id
    pub fn edit_user(
        &mut self,
        user_id: u64,
        given_name: &str,
        family_name: &str,
        user_name: &str,
    ) -> bool {
        match self.users.iter_mut().find(|user| user.id() == user_id) {
            Some(user) => {
                user.set_names(given_name, family_name, user_name);
                true
            }
            None => false,
        }
    }

    /// The id the next created user will receive
    pub fn next_id(&self) -> u64 {
        self.counter.peek()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn position(&self, user_id: u64) -> Option<usize> {
        self.users.iter().position(|user| user.id() == user_id)
    }
}

impl Default for UserList {
    fn default() -> Self {
        Self::new()
    }
}
