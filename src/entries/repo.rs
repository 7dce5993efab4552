use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Entry, NewEntry};

/// Persistence for entries, partitioned by date.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries for `date`, oldest first.
    async fn find_by_date(&self, date: &str) -> anyhow::Result<Vec<Entry>>;
    async fn create(&self, entry: NewEntry) -> anyhow::Result<Entry>;
    /// Fails when no entry with `id` exists.
    async fn delete(&self, id: Uuid) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgEntryStore {
    db: PgPool,
}

impl PgEntryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn find_by_date(&self, date: &str) -> anyhow::Result<Vec<Entry>> {
        let rows = sqlx::query_as::<_, Entry>(
            r#"
            SELECT id, name, calories, category, date, created_at
              FROM entries
             WHERE date = $1
             ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.db)
        .await
        .context("select entries by date")?;
        Ok(rows)
    }

    async fn create(&self, entry: NewEntry) -> anyhow::Result<Entry> {
        let row = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries (id, name, calories, category, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, calories, category, date, created_at
            "#,
        )
        .bind(entry.id)
        .bind(&entry.name)
        .bind(entry.calories)
        .bind(&entry.category) // Option<String> → NULL allowed
        .bind(&entry.date)
        .fetch_one(&self.db)
        .await
        .context("insert entry")?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
        let res = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete entry")?;
        anyhow::ensure!(res.rows_affected() > 0, "entry {} not found", id);
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use time::OffsetDateTime;

    use super::*;

    /// In-process store for tests. Counts every call and can be told to fail.
    #[derive(Default)]
    pub struct MemoryEntryStore {
        entries: Mutex<Vec<Entry>>,
        calls: AtomicUsize,
        failing: bool,
    }

    impl MemoryEntryStore {
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn stored(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        fn enter(&self) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            anyhow::ensure!(!self.failing, "store unavailable");
            Ok(())
        }
    }

    #[async_trait]
    impl EntryStore for MemoryEntryStore {
        async fn find_by_date(&self, date: &str) -> anyhow::Result<Vec<Entry>> {
            self.enter()?;
            let mut rows: Vec<Entry> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.date == date)
                .cloned()
                .collect();
            rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            Ok(rows)
        }

        async fn create(&self, entry: NewEntry) -> anyhow::Result<Entry> {
            self.enter()?;
            let mut entries = self.entries.lock().unwrap();
            // keep timestamps strictly increasing so insertion order is observable
            let mut created_at = OffsetDateTime::now_utc();
            if let Some(last) = entries.iter().map(|e| e.created_at).max() {
                if created_at <= last {
                    created_at = last + time::Duration::microseconds(1);
                }
            }
            let row = Entry {
                id: entry.id,
                name: entry.name,
                calories: entry.calories,
                category: entry.category,
                date: entry.date,
                created_at,
            };
            entries.push(row.clone());
            Ok(row)
        }

        async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
            self.enter()?;
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            anyhow::ensure!(entries.len() < before, "entry {} not found", id);
            Ok(())
        }
    }
}
