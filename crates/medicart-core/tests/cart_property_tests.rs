//! Property tests for the cart algebra.

use proptest::prelude::*;

use medicart_core::cart::Cart;
use medicart_core::checkout::compute_total;
use medicart_core::models::CartLineItem;
use medicart_core::store::MemoryStore;

const IDS: [&str; 3] = ["m1", "m2", "m3"];

fn make_line(id: &str, price: f64, quantity: u32) -> CartLineItem {
    CartLineItem {
        id: id.into(),
        name: format!("Medicine {id}"),
        price,
        manufacturer: "Cipla".into(),
        prescription_required: false,
        quantity,
    }
}

proptest! {
    /// Any sequence of adds with repeated ids collapses to one line per id
    /// whose quantity is the sum of all quantities passed.
    #[test]
    fn repeated_adds_merge_quantities(
        adds in proptest::collection::vec((0usize..IDS.len(), 1u32..20), 1..40)
    ) {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);

        let mut expected = [0u32; 3];
        for (index, quantity) in &adds {
            cart.add_line(make_line(IDS[*index], 50.0, *quantity)).unwrap();
            expected[*index] += quantity;
        }

        let items = cart.items().unwrap();
        let distinct_ids = expected.iter().filter(|sum| **sum > 0).count();
        prop_assert_eq!(items.len(), distinct_ids);

        for (index, id) in IDS.iter().enumerate() {
            let quantity = items
                .iter()
                .find(|item| item.id == *id)
                .map(|item| item.quantity)
                .unwrap_or(0);
            prop_assert_eq!(quantity, expected[index]);
        }
    }

    /// Zero-quantity updates never change the collection.
    #[test]
    fn zero_quantity_update_is_noop(
        initial in proptest::collection::vec((0usize..IDS.len(), 1u32..20), 1..10),
        target in 0usize..IDS.len()
    ) {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        for (index, quantity) in &initial {
            cart.add_line(make_line(IDS[*index], 50.0, *quantity)).unwrap();
        }

        let before = cart.items().unwrap();
        cart.set_quantity(IDS[target], 0).unwrap();
        prop_assert_eq!(cart.items().unwrap(), before);
    }

    /// The computed total always equals the sum of line totals, with
    /// integer-cent prices to keep float arithmetic exact.
    #[test]
    fn total_matches_line_sums(
        lines in proptest::collection::vec((1u32..1000, 1u32..10), 0..8)
    ) {
        let items: Vec<CartLineItem> = lines
            .iter()
            .enumerate()
            .map(|(index, (price, quantity))| {
                make_line(&format!("m{index}"), f64::from(*price), *quantity)
            })
            .collect();

        let expected: u64 = lines
            .iter()
            .map(|(price, quantity)| u64::from(*price) * u64::from(*quantity))
            .sum();

        prop_assert_eq!(compute_total(&items), expected as f64);
    }

    /// Removing an id leaves every other line untouched, and removing it
    /// again is a no-op.
    #[test]
    fn remove_is_idempotent(
        initial in proptest::collection::vec((0usize..IDS.len(), 1u32..20), 1..10),
        target in 0usize..IDS.len()
    ) {
        let store = MemoryStore::new();
        let cart = Cart::new(&store);
        for (index, quantity) in &initial {
            cart.add_line(make_line(IDS[*index], 50.0, *quantity)).unwrap();
        }

        cart.remove_item(IDS[target]).unwrap();
        let after_first = cart.items().unwrap();
        prop_assert!(after_first.iter().all(|item| item.id != IDS[target]));

        cart.remove_item(IDS[target]).unwrap();
        prop_assert_eq!(cart.items().unwrap(), after_first);
    }
}
