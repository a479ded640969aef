//! Repository trait and the in-memory table backing it.
//!
//! Content lives in process memory only: a restart reverts every edit to
//! the seed data.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::AppError;

/// Record stored in a [`MemoryTable`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Noun used in not-found messages, e.g. `Post`.
    const LABEL: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Mutation applied in place under the table's write lock.
pub type RecordUpdate<T> = Box<dyn FnOnce(&mut T) -> Result<(), AppError> + Send>;

pub fn not_found<T: Record>() -> AppError {
    AppError::NotFound(format!("{} not found", T::LABEL))
}

/// Standard repository trait for content records.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, AppError>;

    /// Find a single record by ID
    async fn find_by_id(&self, id: i64) -> Result<T, AppError>;

    /// Store a new record; the incoming id is replaced by a fresh one.
    async fn create(&self, item: T) -> Result<T, AppError>;

    /// Apply `change` to the record with `id` and return the new value. The
    /// record is left untouched when `change` fails.
    async fn update(&self, id: i64, change: RecordUpdate<T>) -> Result<T, AppError>;

    /// Delete a record by ID
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Vector-backed table with monotonically increasing ids.
pub struct MemoryTable<T> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Record> MemoryTable<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Seeds the table; new ids continue after the largest seeded id.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// First record matching `predicate`.
    pub async fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| predicate(row))
            .cloned()
    }

    /// Stores `item` unless `conflict` finds a clash with an existing row.
    /// The check and the insert happen under one write lock.
    pub async fn create_unless(
        &self,
        mut item: T,
        conflict: impl Fn(&T, &T) -> Option<AppError>,
    ) -> Result<T, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(err) = rows.iter().find_map(|row| conflict(row, &item)) {
            return Err(err);
        }
        item.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.push(item.clone());
        Ok(item)
    }
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryTable<T> {
    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<T, AppError> {
        self.find_first(|row| row.id() == id)
            .await
            .ok_or_else(not_found::<T>)
    }

    async fn create(&self, mut item: T) -> Result<T, AppError> {
        let mut rows = self.rows.write().await;
        item.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: i64, change: RecordUpdate<T>) -> Result<T, AppError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(not_found::<T>)?;
        let mut draft = row.clone();
        change(&mut draft)?;
        draft.set_id(id);
        *row = draft.clone();
        Ok(draft)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(not_found::<T>());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        body: String,
    }

    impl Record for Note {
        const LABEL: &'static str = "Note";

        fn id(&self) -> i64 {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = id;
        }
    }

    fn note(id: i64, body: &str) -> Note {
        Note {
            id,
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_ids_after_seeded_rows() {
        let table = MemoryTable::with_rows(vec![note(1, "a"), note(4, "b")]);
        let created = table.create(note(0, "c")).await.unwrap();
        assert_eq!(created.id, 5);
        let again = table.create(note(99, "d")).await.unwrap();
        assert_eq!(again.id, 6);
        assert_eq!(table.len().await, 4);
    }

    #[tokio::test]
    async fn missing_ids_are_reported_with_label() {
        let table: MemoryTable<Note> = MemoryTable::new();
        match table.find_by_id(3).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Note not found"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(table.delete(3).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn failed_update_leaves_row_untouched() {
        let table = MemoryTable::with_rows(vec![note(1, "draft")]);
        let result = table
            .update(
                1,
                Box::new(|row: &mut Note| {
                    row.body = "changed".into();
                    Err(AppError::BadRequest("nope".into()))
                }),
            )
            .await;
        assert!(result.is_err());
        assert_eq!(table.find_by_id(1).await.unwrap().body, "draft");

        let updated = table
            .update(
                1,
                Box::new(|row: &mut Note| {
                    row.body = "final".into();
                    row.id = 42;
                    Ok(())
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated, note(1, "final"));
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let table = MemoryTable::with_rows(vec![note(1, "a"), note(2, "b")]);
        table.delete(1).await.unwrap();
        let rows = table.find_all().await.unwrap();
        assert_eq!(rows, vec![note(2, "b")]);
    }
}
