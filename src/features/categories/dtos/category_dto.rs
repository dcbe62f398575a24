use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::shared::validation::SLUG_REGEX;

fn default_is_active() -> bool {
    true
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    pub name: Option<String>,

    /// URL-safe identifier, e.g. `yu-gi-oh`
    #[validate(
        required(message = "slug is required"),
        length(min = 1, max = 100, message = "slug must be between 1 and 100 characters"),
        regex(
            path = *SLUG_REGEX,
            message = "slug must contain only lowercase letters, numbers and single hyphens"
        )
    )]
    pub slug: Option<String>,

    pub description: Option<String>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,
}

impl CreateCategoryDto {
    /// Convert a validated request into store input.
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            description: self.description,
            is_active: self.is_active,
            display_order: self.display_order,
        }
    }
}

/// Request DTO for partially updating a category; omitted fields are kept
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "slug must be between 1 and 100 characters"),
        regex(
            path = *SLUG_REGEX,
            message = "slug must contain only lowercase letters, numbers and single hyphens"
        )
    )]
    pub slug: Option<String>,

    pub description: Option<String>,

    pub is_active: Option<bool>,

    pub display_order: Option<i32>,
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            is_active: dto.is_active,
            display_order: dto.display_order,
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            is_active: c.is_active,
            display_order: c.display_order,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
