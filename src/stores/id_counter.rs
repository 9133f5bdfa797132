use crate::core::error::ValidationError;

/// Source of user ids.
///
/// Starts at 1 and increases by one per allocation. Ids are never handed
/// out twice, even after the user holding one is deleted. `u64::MAX` is
/// never allocated; reaching it exhausts the counter.
#[derive(Debug)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter whose first allocated id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Return the current value and advance the counter
    pub fn next_id(&mut self) -> Result<u64, ValidationError> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(ValidationError::IdsExhausted)?;
        Ok(id)
    }

    /// The id the next allocation will return
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
