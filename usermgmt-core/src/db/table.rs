// File: usermgmt-core/src/db/table.rs

use std::collections::BTreeMap;

use crate::Error;
use usermgmt_common::models::Entity;

/// A keyed table with a monotonic id allocator. Ids are never reused,
/// even after the highest row is removed.
pub struct Table<T> {
    name: &'static str,
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Entity> Table<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Stores a detached copy of `row`, assigning an id when it is unset (0).
    pub fn insert(&mut self, row: &T) -> Result<T, Error> {
        let mut row = row.clone();
        row.detach();

        match row.id() {
            0 => row.set_id(self.next_id),
            id if id < 0 => {
                return Err(Error::Validation(format!("{} id must be positive, got {}", self.name, id)));
            }
            id if self.rows.contains_key(&id) => {
                return Err(Error::Conflict(format!("{} with id {} already exists", self.name, id)));
            }
            _ => {}
        }

        let id = row.id();
        self.next_id = self.next_id.max(id + 1);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn replace(&mut self, row: &T) -> Result<(), Error> {
        let slot = self
            .rows
            .get_mut(&row.id())
            .ok_or_else(|| Error::NotFound(format!("{} with id {}", self.name, row.id())))?;
        let mut row = row.clone();
        row.detach();
        *slot = row;
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<T, Error> {
        self.rows
            .remove(&id)
            .ok_or_else(|| Error::NotFound(format!("{} with id {}", self.name, id)))
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.rows.retain(|_, row| keep(row));
    }
}
