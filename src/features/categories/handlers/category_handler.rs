use axum::{extract::Path, extract::Query, extract::State, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, GetCategoryQuery, ListCategoriesQuery,
    UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// Fetch a single category by id or slug
#[utoipa::path(
    get,
    path = "/api/categories",
    params(GetCategoryQuery),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<GetCategoryQuery>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(query.id, query.slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// List categories with filters, sorting and pagination
#[utoipa::path(
    get,
    path = "/api/categories/list",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "Matching categories with total count", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (categories, total) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already taken")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Partially update a category
#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or empty patch"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category, returning its prior values
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.delete(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::categories::routes;
    use crate::features::categories::services::CategoryService;
    use crate::features::categories::store::memory::InMemoryCategoryStore;
    use std::sync::Arc;

    fn test_server() -> TestServer {
        let store = Arc::new(InMemoryCategoryStore::new());
        let service = Arc::new(CategoryService::new(store));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn get_unknown_category_returns_404() {
        let server = test_server();
        let response = server
            .get("/api/categories")
            .add_query_param("slug", "missing")
            .await;
        assert_eq!(response.status_code(), 404);

        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn create_then_fetch_by_slug() {
        let server = test_server();

        let created = server
            .post("/api/categories")
            .json(&json!({
                "slug": "news",
                "name": "news",
                "description": "fresh news daily",
                "active": true
            }))
            .await;
        assert_eq!(created.status_code(), 200);

        let body: Value = created.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["slug"], json!("news"));
        assert!(body["data"]["id"].is_string());
        assert!(body["data"]["createdDate"].is_string());

        let fetched = server
            .get("/api/categories")
            .add_query_param("slug", "news")
            .await;
        assert_eq!(fetched.status_code(), 200);
        let body: Value = fetched.json();
        assert_eq!(body["data"]["name"], json!("news"));
    }

    #[tokio::test]
    async fn create_with_invalid_slug_returns_400() {
        let server = test_server();
        let response = server
            .post("/api/categories")
            .json(&json!({
                "slug": "news-1",
                "name": "news",
                "active": true
            }))
            .await;
        assert_eq!(response.status_code(), 400);
    }

    #[tokio::test]
    async fn duplicate_slug_returns_409() {
        let server = test_server();
        let payload = json!({
            "slug": "news",
            "name": "news",
            "active": true
        });

        let first = server.post("/api/categories").json(&payload).await;
        assert_eq!(first.status_code(), 200);

        let second = server.post("/api/categories").json(&payload).await;
        assert_eq!(second.status_code(), 409);
    }

    #[tokio::test]
    async fn patch_with_empty_body_returns_400() {
        let server = test_server();

        let created = server
            .post("/api/categories")
            .json(&json!({"slug": "news", "name": "news", "active": true}))
            .await;
        let id = created.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server
            .patch(&format!("/api/categories/{id}"))
            .json(&json!({}))
            .await;
        assert_eq!(response.status_code(), 400);
    }

    #[tokio::test]
    async fn patch_unknown_id_returns_404() {
        let server = test_server();
        let response = server
            .patch("/api/categories/00000000-0000-0000-0000-000000000000")
            .json(&json!({"name": "headlines"}))
            .await;
        assert_eq!(response.status_code(), 404);
    }

    #[tokio::test]
    async fn delete_returns_prior_values() {
        let server = test_server();

        let created = server
            .post("/api/categories")
            .json(&json!({"slug": "news", "name": "news", "active": true}))
            .await;
        let id = created.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let deleted = server.delete(&format!("/api/categories/{id}")).await;
        assert_eq!(deleted.status_code(), 200);
        let body: Value = deleted.json();
        assert_eq!(body["data"]["slug"], json!("news"));

        let gone = server.delete(&format!("/api/categories/{id}")).await;
        assert_eq!(gone.status_code(), 404);
    }

    #[tokio::test]
    async fn list_reports_total_in_meta() {
        let server = test_server();

        for slug in ["news", "sports"] {
            let response = server
                .post("/api/categories")
                .json(&json!({"slug": slug, "name": slug, "active": true}))
                .await;
            assert_eq!(response.status_code(), 200);
        }

        let response = server
            .get("/api/categories/list")
            .add_query_param("pageSize", "1")
            .await;
        assert_eq!(response.status_code(), 200);

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], json!(2));
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_with_out_of_range_page_size_returns_400() {
        let server = test_server();
        let response = server
            .get("/api/categories/list")
            .add_query_param("pageSize", "10")
            .await;
        assert_eq!(response.status_code(), 400);
    }
}
