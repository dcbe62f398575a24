use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::stores::CategoryStore;
use crate::shared::constants::CATEGORY_DELETED_MESSAGE;
use crate::shared::types::MessageResponse;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Category with ID {} not found", id))
}

/// Service for category operations
///
/// Owns the existence checks: the store reports absence, the service turns it
/// into NotFound.
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Create a category from a validated request
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.store.create(dto.into_new_category()).await?;
        tracing::debug!("Category {} created with slug '{}'", category.id, category.slug);

        Ok(category.into())
    }

    /// List all categories (flat list)
    pub async fn find_all(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_all().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by ID
    pub async fn find_one(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.store
            .get_by_id(id)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| not_found(id))
    }

    /// Apply a partial update; fails with NotFound before writing anything
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        self.find_one(id).await?;

        // The row can disappear between the lookup and the write
        self.store
            .update(id, dto.into())
            .await?
            .map(|c| c.into())
            .ok_or_else(|| not_found(id))
    }

    /// Physically delete a category
    pub async fn remove(&self, id: Uuid) -> Result<MessageResponse> {
        let affected = self.store.delete_by_id(id).await?;
        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::debug!("Category {} deleted", id);
        Ok(MessageResponse::new(CATEGORY_DELETED_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::stores::InMemoryCategoryStore;
    use fake::{faker::lorem::en::Word, Fake};
    use tokio_test::{assert_err, assert_ok};

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryCategoryStore::new()))
    }

    fn create_dto(name: &str, slug: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: Some(name.to_string()),
            slug: Some(slug.to_string()),
            description: None,
            is_active: true,
            display_order: 0,
        }
    }

    fn random_dto() -> CreateCategoryDto {
        let word: String = Word().fake();
        let suffix = Uuid::new_v4().simple().to_string();
        create_dto(
            &format!("{} {}", word, suffix),
            &format!("{}-{}", word.to_lowercase(), suffix),
        )
    }

    #[tokio::test]
    async fn test_create_returns_record_with_generated_id() {
        let service = service();

        let created = service.create(create_dto("Magic", "magic")).await.unwrap();

        assert!(!created.id.is_nil());
        assert_eq!(created.name, "Magic");
        assert_eq!(created.slug, "magic");
        assert!(created.is_active);
        assert_eq!(created.display_order, 0);
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn test_create_with_duplicate_name_or_slug_conflicts() {
        let service = service();
        assert_ok!(service.create(create_dto("Magic", "magic")).await);

        let err = assert_err!(service.create(create_dto("Magic", "magic-2")).await);
        assert!(matches!(err, AppError::Conflict(_)));

        let err = assert_err!(service.create(create_dto("Magic 2", "magic")).await);
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_all_on_empty_store_is_empty() {
        let categories = service().find_all().await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_display_order_then_name() {
        let service = service();
        let mut second = create_dto("Pokemon", "pokemon");
        second.display_order = 2;
        let mut first_b = create_dto("Yu-Gi-Oh!", "yu-gi-oh");
        first_b.display_order = 1;
        let mut first_a = create_dto("Magic", "magic");
        first_a.display_order = 1;

        for dto in [second, first_b, first_a] {
            assert_ok!(service.create(dto).await);
        }

        let names: Vec<String> = service
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Magic", "Yu-Gi-Oh!", "Pokemon"]);
    }

    #[tokio::test]
    async fn test_find_one_unknown_id_is_not_found() {
        let id = Uuid::new_v4();

        let err = service().find_one(id).await.unwrap_err();

        match err {
            AppError::NotFound(msg) => {
                assert_eq!(msg, format!("Category with ID {} not found", id))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_writes_nothing() {
        let service = service();
        let existing = service.create(random_dto()).await.unwrap();

        let err = service
            .update(
                Uuid::new_v4(),
                UpdateCategoryDto {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let unchanged = service.find_one(existing.id).await.unwrap();
        assert_eq!(unchanged.name, existing.name);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let service = service();
        let mut dto = create_dto("Magic", "magic");
        dto.description = Some("The Gathering".to_string());
        let created = service.create(dto).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateCategoryDto {
                    display_order: Some(5),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Magic");
        assert_eq!(updated.slug, "magic");
        assert_eq!(updated.description.as_deref(), Some("The Gathering"));
        assert_eq!(updated.display_order, 5);
        assert!(!updated.is_active);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_conflicts() {
        let service = service();
        assert_ok!(service.create(create_dto("Magic", "magic")).await);
        let pokemon = service.create(create_dto("Pokemon", "pokemon")).await.unwrap();

        let err = service
            .update(
                pokemon.id,
                UpdateCategoryDto {
                    slug: Some("magic".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_remove_deletes_and_confirms() {
        let service = service();
        let created = service.create(random_dto()).await.unwrap();

        let response = service.remove(created.id).await.unwrap();
        assert_eq!(response.message, "Category deleted successfully");

        let err = service.find_one(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_not_found_and_deletes_nothing() {
        let service = service();
        assert_ok!(service.create(random_dto()).await);

        let id = Uuid::new_v4();
        match service.remove(id).await.unwrap_err() {
            AppError::NotFound(msg) => {
                assert_eq!(msg, format!("Category with ID {} not found", id))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }

        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }
}
