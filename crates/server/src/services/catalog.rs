//! Catalog service.

use shopcart_core::Price;

use crate::db::Store;
use crate::db::items::ItemRepository;
use crate::error::{AppError, Result};
use crate::models::{Item, NewItem};

/// Item creation and listing.
pub struct CatalogService<'a> {
    items: ItemRepository<'a>,
}

impl<'a> CatalogService<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            items: ItemRepository::new(store),
        }
    }

    /// Add an item to the catalog.
    ///
    /// A blank description is stored as no description.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the name is blank.
    pub fn create_item(
        &self,
        name: &str,
        description: Option<String>,
        price: Price,
    ) -> Result<Item> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        let item = self.items.create(NewItem {
            name: name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            price,
        });

        tracing::info!(item_id = %item.id, price = %item.price, "Item created");
        Ok(item)
    }

    /// The whole catalog, oldest first.
    #[must_use]
    pub fn list_items(&self) -> Vec<Item> {
        self.items.list()
    }
}
