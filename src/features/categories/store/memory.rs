//! In-memory store used by workflow and handler tests. Applies the same
//! predicate/order/window semantics as the Postgres store.

use std::cmp::Ordering;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryPatch, NewCategory};
use crate::features::categories::query::{
    CategoryPredicate, PageWindow, SortDirection, SortField, SortOrder,
};
use crate::features::categories::store::{CategoryKey, CategoryStore};

#[derive(Default)]
pub struct InMemoryCategoryStore {
    rows: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with fully specified rows (fixed timestamps, known ids).
    pub fn with_rows(rows: Vec<Category>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

fn matches_key(row: &Category, key: &CategoryKey) -> bool {
    let by_id = key.id.is_some_and(|id| row.id == id);
    let by_slug = key.slug.as_deref().is_some_and(|slug| row.slug == slug);
    by_id || by_slug
}

fn matches_predicate(row: &Category, predicate: &CategoryPredicate) -> bool {
    if let Some(active) = predicate.active {
        if row.active != active {
            return false;
        }
    }

    if let Some(search) = &predicate.search {
        let in_name = row.name.contains(search.as_str());
        let in_description = row
            .description
            .as_deref()
            .is_some_and(|d| d.contains(search.as_str()));
        return in_name || in_description;
    }

    if let Some(name) = &predicate.name {
        if !row.name.contains(name.as_str()) {
            return false;
        }
    }

    if let Some(description) = &predicate.description {
        if !row
            .description
            .as_deref()
            .is_some_and(|d| d.contains(description.as_str()))
        {
            return false;
        }
    }

    true
}

fn compare(a: &Category, b: &Category, order: &SortOrder) -> Ordering {
    let ordering = match order.field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Active => a.active.cmp(&b.active),
        SortField::CreatedDate => a.created_date.cmp(&b.created_date),
    };

    match order.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[async_trait::async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn find_one(&self, key: &CategoryKey) -> Result<Option<Category>> {
        if key.id.is_none() && key.slug.is_none() {
            return Ok(None);
        }

        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| matches_key(row, key)).cloned())
    }

    async fn find_many(
        &self,
        predicate: &CategoryPredicate,
        order: &SortOrder,
        window: &PageWindow,
    ) -> Result<Vec<Category>> {
        let rows = self.rows.read().await;
        let mut selected: Vec<Category> = rows
            .iter()
            .filter(|row| matches_predicate(row, predicate))
            .cloned()
            .collect();
        selected.sort_by(|a, b| compare(a, b, order));

        Ok(selected
            .into_iter()
            .skip(window.offset.max(0) as usize)
            .take(window.limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, predicate: &CategoryPredicate) -> Result<i64> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| matches_predicate(row, predicate))
            .count() as i64)
    }

    async fn insert(&self, new: NewCategory) -> Result<Category> {
        let row = Category {
            id: new.id,
            slug: new.slug,
            name: new.name,
            description: new.description,
            active: new.active,
            created_date: Utc::now(),
        };

        let mut rows = self.rows.write().await;
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        if let Some(slug) = patch.slug {
            row.slug = slug;
        }
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(active) = patch.active {
            row.active = active;
        }

        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Category> {
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        Ok(rows.remove(position))
    }
}
