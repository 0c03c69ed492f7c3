//! In-memory repository adapters.
//!
//! Used when the server runs without a database URL and by handler tests.
//! Rows live in a `BTreeMap` keyed by identifier so iteration order matches
//! the id-ascending order of the SQL adapters. Identifiers are never reused,
//! mirroring a `SERIAL` column.

mod employee_store;
mod lookup_store;
mod user_store;

pub use employee_store::InMemoryEmployeeRepository;
pub use lookup_store::InMemoryLookupRepository;
pub use user_store::InMemoryUserRepository;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Identifier-ordered rows plus the next identifier to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> Option<i32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(id)
    }
}

/// Lock a table, reporting poisoning as a message for the caller's error type.
fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, String> {
    table
        .lock()
        .map_err(|_| "in-memory table lock poisoned".to_owned())
}
