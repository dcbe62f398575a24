use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};

use super::CategoryStore;

/// Category store backed by a vector, mirroring the table's unique constraints.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    rows: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(rows: &[Category], except: Option<Uuid>, name: &str, slug: &str) -> Result<()> {
        let others = rows.iter().filter(|c| Some(c.id) != except);
        for other in others {
            if other.name == name {
                return Err(AppError::Conflict(
                    "Category with this name already exists".to_string(),
                ));
            }
            if other.slug == slug {
                return Err(AppError::Conflict(
                    "Category with this slug already exists".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn create(&self, category: NewCategory) -> Result<Category> {
        let mut rows = self.rows.write().await;
        Self::check_unique(&rows, None, &category.name, &category.slug)?;

        let now = Utc::now();
        let created = Category {
            id: Uuid::new_v4(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            is_active: category.is_active,
            display_order: category.display_order,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.rows.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut rows = self.rows.write().await;
        let Some(index) = rows.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        let mut updated = rows[index].clone();
        changes.apply_to(&mut updated);
        Self::check_unique(&rows, Some(id), &updated.name, &updated.slug)?;
        updated.updated_at = Utc::now();

        rows[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok((before - rows.len()) as u64)
    }
}
