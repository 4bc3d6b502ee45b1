//! Local list with optimistic edits.
//!
//! An edit is applied to the list immediately and handed back as a
//! [`PendingChange`]. Once the backend answers, the caller either commits it
//! (optionally replacing the row with the server's copy) or rolls it back to the
//! row as it was before the edit.

use doudou_core::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending change must be committed or rolled back"]
pub struct PendingChange<T> {
    previous: T,
}

impl<T: Entity> PendingChange<T> {
    pub fn id(&self) -> T::Id {
        self.previous.id()
    }

    pub fn previous(&self) -> &T {
        &self.previous
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimisticList<T> {
    items: Vec<T>,
}

impl<T> Default for OptimisticList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity + Clone> OptimisticList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Apply `edit` to the row with `id` right away. `None` when no such row.
    pub fn begin<F>(&mut self, id: T::Id, edit: F) -> Option<PendingChange<T>>
    where
        F: FnOnce(&mut T),
    {
        let row = self.items.iter_mut().find(|item| item.id() == id)?;
        let previous = row.clone();
        edit(row);
        Some(PendingChange { previous })
    }

    /// Keep the edit. `confirmed` replaces the row when the backend returned one.
    pub fn commit(&mut self, pending: PendingChange<T>, confirmed: Option<T>) {
        if let Some(confirmed) = confirmed {
            let id = pending.id();
            if let Some(row) = self.items.iter_mut().find(|item| item.id() == id) {
                *row = confirmed;
            }
        }
    }

    /// Put the row back the way it was before the edit.
    pub fn rollback(&mut self, pending: PendingChange<T>) {
        let id = pending.id();
        if let Some(row) = self.items.iter_mut().find(|item| item.id() == id) {
            *row = pending.previous;
        }
    }
}
