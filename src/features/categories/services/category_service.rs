use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, ListCategoriesQuery, UpdateCategoryDto,
};
use crate::features::categories::models::{CategoryPatch, NewCategory};
use crate::features::categories::store::{CategoryKey, CategoryStore};

/// CRUD workflow for categories.
///
/// Slug uniqueness and row existence are enforced by a lookup before the
/// mutating call. The two steps are not atomic; under concurrent writers the
/// store's own guarantees are the only real protection.
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Fetch a single category by id or slug (OR over whichever are given)
    pub async fn get(&self, id: Option<Uuid>, slug: Option<String>) -> Result<CategoryResponseDto> {
        let key = CategoryKey { id, slug };
        self.store
            .find_one(&key)
            .await?
            .map(CategoryResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Filtered, sorted, paginated listing with the total match count.
    ///
    /// The count and the page fetch are two separate queries; they may see
    /// different snapshots under concurrent writes.
    pub async fn list(
        &self,
        query: &ListCategoriesQuery,
    ) -> Result<(Vec<CategoryResponseDto>, i64)> {
        let predicate = query.predicate();
        let order = query.sort_order();
        let window = query.page_window();

        let total = self.store.count(&predicate).await?;
        let items = self.store.find_many(&predicate, &order, &window).await?;

        Ok((
            items.into_iter().map(CategoryResponseDto::from).collect(),
            total,
        ))
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let existing = self
            .store
            .find_one(&CategoryKey::slug(dto.slug.clone()))
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Category with slug '{}' already exists",
                dto.slug
            )));
        }

        let category = self
            .store
            .insert(NewCategory {
                id: Uuid::new_v4(),
                slug: dto.slug,
                name: dto.name,
                description: dto.description,
                active: dto.active,
            })
            .await?;

        tracing::info!("Category created: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }

    /// Apply the present fields of the patch. An empty patch is rejected
    /// rather than silently accepted.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let patch = CategoryPatch::from(dto);
        if patch.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        self.store
            .find_one(&CategoryKey::id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        let category = self.store.update(id, patch).await?;

        tracing::info!("Category updated: id={}", category.id);

        Ok(category.into())
    }

    /// Delete a category and return its prior values.
    pub async fn delete(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.store
            .find_one(&CategoryKey::id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        let category = self.store.delete(id).await?;

        tracing::info!("Category deleted: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }
}
