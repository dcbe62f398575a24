//! Persistence boundary for categories.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};

const CATEGORY_COLUMNS: &str =
    "id, name, slug, description, is_active, display_order, created_at, updated_at";

/// Creates, reads, updates and deletes category rows.
///
/// Absent rows are reported as `None` / zero rows affected; deciding whether
/// that is an error belongs to the caller.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a category with a fresh id; duplicate name or slug is a conflict.
    async fn create(&self, category: NewCategory) -> Result<Category>;

    /// All categories ordered by display order, then name.
    async fn list_all(&self) -> Result<Vec<Category>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    /// Merge `changes` into the row and refresh `updated_at`.
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    /// Number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: Uuid) -> Result<u64>;
}

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            let field = match db_err.constraint() {
                Some(c) if c.contains("slug") => "slug",
                Some(c) if c.contains("name") => "name",
                _ => "name or slug",
            };
            return AppError::Conflict(format!("Category with this {} already exists", field));
        }
    }

    tracing::error!("Category query failed: {:?}", e);
    AppError::Database(e)
}

pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn create(&self, category: NewCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (id, name, slug, description, is_active, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(Uuid::new_v4())
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .bind(category.is_active)
            .bind(category.display_order)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories ORDER BY display_order, name",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = COALESCE($1, name),
                slug = COALESCE($2, slug),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                display_order = COALESCE($5, display_order),
                updated_at = NOW()
            WHERE id = $6
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(changes.name)
            .bind(changes.slug)
            .bind(changes.description)
            .bind(changes.is_active)
            .bind(changes.display_order)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected())
    }
}
