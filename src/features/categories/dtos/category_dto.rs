use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::CategoryPatch;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::validation::{SLUG_REGEX, TEXT_REGEX};

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    /// Unique human-chosen key, latin letters only
    #[validate(regex(path = *SLUG_REGEX, message = "slug must contain only latin letters"))]
    pub slug: String,

    /// Display name
    #[validate(
        length(min = 1, max = 255),
        regex(path = *TEXT_REGEX, message = "name must contain only letters and spaces")
    )]
    pub name: String,

    #[validate(
        length(max = 1000),
        regex(path = *TEXT_REGEX, message = "description must contain only letters and spaces")
    )]
    pub description: Option<String>,

    pub active: bool,
}

// Update request; every field optional, absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(regex(path = *SLUG_REGEX, message = "slug must contain only latin letters"))]
    pub slug: Option<String>,

    #[validate(
        length(min = 1, max = 255),
        regex(path = *TEXT_REGEX, message = "name must contain only letters and spaces")
    )]
    pub name: Option<String>,

    #[validate(
        length(max = 1000),
        regex(path = *TEXT_REGEX, message = "description must contain only letters and spaces")
    )]
    pub description: Option<String>,

    pub active: Option<bool>,
}

impl From<UpdateCategoryDto> for CategoryPatch {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            slug: dto.slug,
            name: dto.name,
            description: dto.description,
            active: dto.active,
        }
    }
}

// Query params for fetching a single category by id or slug
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct GetCategoryQuery {
    /// Category identifier
    pub id: Option<Uuid>,
    /// Unique category slug
    pub slug: Option<String>,
}

// Query params for the filtered listing
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesQuery {
    /// Substring filter on the display name
    #[validate(regex(path = *TEXT_REGEX, message = "name must contain only letters and spaces"))]
    pub name: Option<String>,

    /// Substring filter on the description
    #[validate(regex(path = *TEXT_REGEX, message = "description must contain only letters and spaces"))]
    pub description: Option<String>,

    /// Search term matched against name or description; overrides both
    /// per-field filters when present
    #[validate(regex(path = *TEXT_REGEX, message = "search must contain only letters and spaces"))]
    pub search: Option<String>,

    /// Filter by active flag
    pub active: Option<bool>,

    /// Items per page, [1,9]
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    #[param(minimum = 1, maximum = 9)]
    pub page_size: i64,

    /// Page number; 0 and 1 both mean the first page
    #[serde(default)]
    #[validate(range(min = 0))]
    #[param(minimum = 0)]
    pub page: i64,

    /// Sort field, optionally prefixed with `-` for descending
    /// (e.g. `name`, `-createdDate`)
    pub sort: Option<String>,
}

impl Default for ListCategoriesQuery {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            search: None,
            active: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
            sort: None,
        }
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    pub created_date: DateTime<Utc>,
}
