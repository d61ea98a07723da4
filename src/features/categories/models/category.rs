use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::categories::dtos::CategoryResponseDto;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_date: DateTime<Utc>,
}

/// Row to insert; `created_date` is stamped by the store
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.active.is_none()
    }
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            slug: c.slug,
            name: c.name,
            description: c.description,
            active: c.active,
            created_date: c.created_date,
        }
    }
}
