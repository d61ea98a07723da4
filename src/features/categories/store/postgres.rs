use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryPatch, NewCategory};
use crate::features::categories::query::{CategoryPredicate, PageWindow, SortOrder};
use crate::features::categories::store::{CategoryKey, CategoryStore};

const COLUMNS: &str = "id, slug, name, description, active, created_date";

/// Postgres-backed category store.
///
/// The list queries are built at runtime because the filter shape depends on
/// the request. Text terms go through numbered binds; the sort column comes
/// from the closed `SortField` enum, never from request input.
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the WHERE clause for a predicate. Returns the clause (empty string
/// when unfiltered) and the text binds in placeholder order.
fn predicate_sql(predicate: &CategoryPredicate) -> (String, Vec<String>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut binds: Vec<String> = Vec::new();

    if let Some(active) = predicate.active {
        conditions.push(format!("active = {}", active));
    }

    if let Some(search) = &predicate.search {
        binds.push(format!("%{}%", search));
        let n = binds.len();
        conditions.push(format!("(name LIKE ${n} OR description LIKE ${n})"));
    } else {
        if let Some(name) = &predicate.name {
            binds.push(format!("%{}%", name));
            conditions.push(format!("name LIKE ${}", binds.len()));
        }
        if let Some(description) = &predicate.description {
            binds.push(format!("%{}%", description));
            conditions.push(format!("description LIKE ${}", binds.len()));
        }
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds)
}

#[async_trait::async_trait]
impl CategoryStore for PgCategoryStore {
    async fn find_one(&self, key: &CategoryKey) -> Result<Option<Category>> {
        let row = match (key.id, key.slug.as_deref()) {
            (Some(id), Some(slug)) => {
                sqlx::query_as::<_, Category>(&format!(
                    "SELECT {COLUMNS} FROM categories WHERE id = $1 OR slug = $2 LIMIT 1"
                ))
                .bind(id)
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
            }
            (Some(id), None) => {
                sqlx::query_as::<_, Category>(&format!(
                    "SELECT {COLUMNS} FROM categories WHERE id = $1 LIMIT 1"
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
            }
            (None, Some(slug)) => {
                sqlx::query_as::<_, Category>(&format!(
                    "SELECT {COLUMNS} FROM categories WHERE slug = $1 LIMIT 1"
                ))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
            }
            (None, None) => return Ok(None),
        };

        row.map_err(AppError::Database)
    }

    async fn find_many(
        &self,
        predicate: &CategoryPredicate,
        order: &SortOrder,
        window: &PageWindow,
    ) -> Result<Vec<Category>> {
        let (where_clause, binds) = predicate_sql(predicate);
        let limit_placeholder = binds.len() + 1;
        let offset_placeholder = binds.len() + 2;

        let sql = format!(
            "SELECT {COLUMNS} FROM categories {} ORDER BY {} {} LIMIT ${} OFFSET ${}",
            where_clause,
            order.field.as_column(),
            order.direction.as_sql(),
            limit_placeholder,
            offset_placeholder,
        );

        let mut query = sqlx::query_as::<_, Category>(&sql);
        for bind in &binds {
            query = query.bind(bind.clone());
        }

        query
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self, predicate: &CategoryPredicate) -> Result<i64> {
        let (where_clause, binds) = predicate_sql(predicate);
        let sql = format!("SELECT COUNT(*) FROM categories {}", where_clause);

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in &binds {
            query = query.bind(bind.clone());
        }

        query.fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn insert(&self, new: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (id, slug, name, description, active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(new.id)
        .bind(new.slug)
        .bind(new.name)
        .bind(new.description)
        .bind(new.active)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category> {
        let mut assignments: Vec<String> = Vec::new();
        let mut placeholder = 1;
        for present in [
            patch.slug.is_some().then_some("slug"),
            patch.name.is_some().then_some("name"),
            patch.description.is_some().then_some("description"),
            patch.active.is_some().then_some("active"),
        ]
        .into_iter()
        .flatten()
        {
            assignments.push(format!("{present} = ${placeholder}"));
            placeholder += 1;
        }

        let sql = format!(
            "UPDATE categories SET {} WHERE id = ${} RETURNING {COLUMNS}",
            assignments.join(", "),
            placeholder,
        );

        let mut query = sqlx::query_as::<_, Category>(&sql);
        if let Some(slug) = patch.slug {
            query = query.bind(slug);
        }
        if let Some(name) = patch.name {
            query = query.bind(name);
        }
        if let Some(description) = patch.description {
            query = query.bind(description);
        }
        if let Some(active) = patch.active {
            query = query.bind(active);
        }

        query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    async fn delete(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "DELETE FROM categories WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }
}
