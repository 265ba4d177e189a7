//! Persisted shopping cart operations.
//!
//! The cart is a client-owned collection of [`CartLineItem`]s stored under
//! the `cart` key. Every operation is a synchronous read-modify-write of the
//! whole collection, so the store is never left with a partial mutation.

use crate::models::{CartLineItem, Medicine};
use crate::store::{KeyValueStore, StoreResult, CART_KEY};

/// Cart manager over an injected store.
pub struct Cart<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> Cart<'a, S> {
    /// Create a cart manager over the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current line items.
    ///
    /// An absent or unparsable value yields an empty cart; the collection
    /// stays usable even if the persisted blob was corrupted out-of-band.
    pub fn items(&self) -> StoreResult<Vec<CartLineItem>> {
        let raw = self.store.get(CART_KEY)?;
        Ok(raw
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default())
    }

    /// Add a medicine to the cart.
    ///
    /// If a line with the same catalog id already exists its quantity grows
    /// by `quantity`; otherwise a new line is appended. Quantities below 1
    /// are ignored.
    pub fn add_item(&self, medicine: &Medicine, quantity: u32) -> StoreResult<()> {
        self.add_line(CartLineItem::from_medicine(medicine, quantity))
    }

    /// Add a pre-built line item, merging on duplicate id.
    pub fn add_line(&self, line: CartLineItem) -> StoreResult<()> {
        if line.quantity < 1 {
            return Ok(());
        }

        let mut items = self.items()?;
        match items.iter_mut().find(|item| item.id == line.id) {
            Some(existing) => existing.quantity += line.quantity,
            None => items.push(line),
        }
        self.save(&items)
    }

    /// Replace the quantity of the line with the given id.
    ///
    /// A no-op for quantities below 1 and for unknown ids.
    pub fn set_quantity(&self, id: &str, quantity: u32) -> StoreResult<()> {
        if quantity < 1 {
            return Ok(());
        }

        let mut items = self.items()?;
        match items.iter_mut().find(|item| item.id == id) {
            Some(existing) => existing.quantity = quantity,
            None => return Ok(()),
        }
        self.save(&items)
    }

    /// Remove the line with the given id. Unknown ids are a no-op.
    pub fn remove_item(&self, id: &str) -> StoreResult<()> {
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(());
        }
        self.save(&items)
    }

    /// Empty the cart (called after a confirmed order submission).
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.items()?.len())
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.items()?.is_empty())
    }

    fn save(&self, items: &[CartLineItem]) -> StoreResult<()> {
        self.store.set_json(CART_KEY, &items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn make_medicine(id: &str, price: f64) -> Medicine {
        let mut med = Medicine::new(id.into(), format!("Medicine {id}"), "Vitamin".into(), price);
        med.quantity = 100;
        med
    }

    #[test]
    fn test_add_appends_new_line() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);

        cart.add_item(&make_medicine("m1", 50.0), 1).unwrap();
        cart.add_item(&make_medicine("m2", 90.0), 2).unwrap();

        let items = cart.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "m1");
        assert_eq!(items[1].quantity, 2);
    }

    #[test]
    fn test_add_merges_duplicate_id() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        let med = make_medicine("m1", 50.0);

        cart.add_item(&med, 1).unwrap();
        cart.add_item(&med, 2).unwrap();

        let items = cart.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);

        cart.add_item(&make_medicine("m1", 50.0), 0).unwrap();
        assert!(cart.is_empty().unwrap());
    }

    #[test]
    fn test_set_quantity() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        cart.add_item(&make_medicine("m1", 50.0), 2).unwrap();

        cart.set_quantity("m1", 5).unwrap();
        assert_eq!(cart.items().unwrap()[0].quantity, 5);

        // Below 1 is a no-op, not a removal
        cart.set_quantity("m1", 0).unwrap();
        assert_eq!(cart.items().unwrap()[0].quantity, 5);

        // Unknown id is a no-op
        cart.set_quantity("ghost", 3).unwrap();
        assert_eq!(cart.len().unwrap(), 1);
    }

    #[test]
    fn test_remove_item() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        cart.add_item(&make_medicine("m1", 50.0), 1).unwrap();
        cart.add_item(&make_medicine("m2", 90.0), 1).unwrap();

        cart.remove_item("m1").unwrap();
        let items = cart.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "m2");

        // Removing twice (or a nonexistent id) is a no-op
        cart.remove_item("m1").unwrap();
        cart.remove_item("ghost").unwrap();
        assert_eq!(cart.len().unwrap(), 1);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        cart.add_item(&make_medicine("m1", 50.0), 1).unwrap();

        cart.clear().unwrap();
        assert!(cart.is_empty().unwrap());

        // The key holds an empty array, not nothing
        assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(CART_KEY, "definitely not json").unwrap();

        let cart = Cart::new(&store);
        assert!(cart.items().unwrap().is_empty());

        // The next write replaces the corrupt value
        cart.add_item(&make_medicine("m1", 50.0), 1).unwrap();
        assert_eq!(cart.len().unwrap(), 1);
    }
}
