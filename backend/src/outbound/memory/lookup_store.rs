//! In-memory [`LookupRepository`] holding the default seed rows.

use async_trait::async_trait;

use crate::domain::ports::{LookupPersistenceError, LookupRepository};
use crate::domain::{District, State};

/// States offered by the web client.
pub(crate) const SEED_STATES: [&str; 5] =
    ["Maharashtra", "Gujarat", "Rajasthan", "Goa", "Karnataka"];
/// Districts offered by the web client.
pub(crate) const SEED_DISTRICTS: [&str; 5] = ["Mumbai", "Pune", "Nagpur", "Nashik", "Thane"];

/// Immutable lookup lists.
#[derive(Debug, Clone)]
pub struct InMemoryLookupRepository {
    states: Vec<State>,
    districts: Vec<District>,
}

impl InMemoryLookupRepository {
    /// Repository holding the same rows as the initial migration.
    pub fn seeded() -> Self {
        Self {
            states: (1..).zip(SEED_STATES).map(|(id, name)| State::new(id, name)).collect(),
            districts: (1..)
                .zip(SEED_DISTRICTS)
                .map(|(id, name)| District::new(id, name))
                .collect(),
        }
    }
}

impl Default for InMemoryLookupRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl LookupRepository for InMemoryLookupRepository {
    async fn states(&self) -> Result<Vec<State>, LookupPersistenceError> {
        Ok(self.states.clone())
    }

    async fn districts(&self) -> Result<Vec<District>, LookupPersistenceError> {
        Ok(self.districts.clone())
    }
}
