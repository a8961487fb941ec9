//! Catalog item repository.

use chrono::Utc;

use shopcart_core::ItemId;

use super::{Store, next_id};
use crate::models::{Item, NewItem};

/// Repository for catalog items.
pub struct ItemRepository<'a> {
    store: &'a Store,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add an item to the catalog.
    #[must_use]
    pub fn create(&self, new_item: NewItem) -> Item {
        let mut tables = self.store.write();

        let id = ItemId::new(next_id(&mut tables.sequences.item));
        let item = Item {
            id,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            created_at: Utc::now(),
        };
        tables.items.insert(id, item.clone());

        item
    }

    /// Get an item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.store.read().items.get(&id).cloned()
    }

    /// List the whole catalog in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.store.read().items.values().cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopcart_core::Price;

    use super::*;

    fn new_item(name: &str, cents: i64) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: None,
            price: Price::new(Decimal::new(cents, 2)).unwrap(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let store = Store::new();
        let items = store.items();

        let book = items.create(new_item("Book", 999));
        assert_eq!(book.id, ItemId::new(1));
        assert_eq!(items.get(book.id).unwrap(), book);
        assert!(items.get(ItemId::new(2)).is_none());
    }

    #[test]
    fn test_list_in_creation_order() {
        let store = Store::new();
        let items = store.items();
        items.create(new_item("Pen", 150));
        items.create(new_item("Book", 999));
        items.create(new_item("Apple", 50));

        let names: Vec<String> = items.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Pen", "Book", "Apple"]);
    }
}
