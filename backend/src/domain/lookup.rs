//! Read-only lookup tables backing the client's state and district pickers.

use serde::Serialize;
use utoipa::ToSchema;

/// Width of the `name` column in both lookup tables.
pub const NAME_WIDTH: usize = 50;

/// A state entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct State {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Maharashtra")]
    name: String,
}

impl State {
    /// Build a state entry.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Row identifier.
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Unique state name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A district entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct District {
    #[schema(example = 2)]
    id: i32,
    #[schema(example = "Pune")]
    name: String,
}

impl District {
    /// Build a district entry.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Row identifier.
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Unique district name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
