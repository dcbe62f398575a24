mod category_store;
#[cfg(test)]
mod memory;

pub use category_store::{CategoryStore, PgCategoryStore};
#[cfg(test)]
pub use memory::InMemoryCategoryStore;
