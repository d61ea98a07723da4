//! Persistence seam for the categories feature.
//!
//! The workflow only talks to [`CategoryStore`]; any implementation that
//! honors the predicate/order/window semantics is substitutable. Production
//! uses [`postgres::PgCategoryStore`], tests use the in-memory store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryPatch, NewCategory};
use crate::features::categories::query::{CategoryPredicate, PageWindow, SortOrder};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgCategoryStore;

/// Lookup key for a single row: OR over whichever parts are present.
/// With neither part present no row matches.
#[derive(Debug, Clone, Default)]
pub struct CategoryKey {
    pub id: Option<Uuid>,
    pub slug: Option<String>,
}

impl CategoryKey {
    pub fn id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fetch the first row matching the key.
    async fn find_one(&self, key: &CategoryKey) -> Result<Option<Category>>;

    /// Fetch the rows matching the predicate, sorted and windowed.
    async fn find_many(
        &self,
        predicate: &CategoryPredicate,
        order: &SortOrder,
        window: &PageWindow,
    ) -> Result<Vec<Category>>;

    /// Count the rows matching the predicate.
    async fn count(&self, predicate: &CategoryPredicate) -> Result<i64>;

    /// Insert a row, stamping its creation date.
    async fn insert(&self, new: NewCategory) -> Result<Category>;

    /// Apply the present patch fields to the row with the given id and
    /// return the updated row.
    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category>;

    /// Delete the row with the given id and return its prior values.
    async fn delete(&self, id: Uuid) -> Result<Category>;
}
