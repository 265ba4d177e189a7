//! Client-side inventory helpers for the admin screens.
//!
//! The inventory page filters, sorts, and summarizes the full medicine list
//! locally after one catalog fetch; the dashboard tiles are the same
//! summary. Search tolerates typos by falling back to fuzzy ranking when no
//! substring matches.

use chrono::NaiveDate;
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::Medicine;

/// Minimum combined similarity for a fuzzy search hit.
const FUZZY_MATCH_THRESHOLD: f64 = 0.78;

/// Sort orders offered by the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Quantity,
    Expiry,
}

/// Filter and sort settings from the inventory toolbar.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    /// Search text; empty matches everything
    pub search: String,
    /// Category filter; `None` means "All"
    pub category: Option<String>,
    /// Sort order; `None` keeps catalog order
    pub sort: Option<SortKey>,
}

impl InventoryFilter {
    /// Whether a medicine passes this filter.
    pub fn matches(&self, medicine: &Medicine) -> bool {
        if let Some(category) = &self.category {
            if !medicine.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        let query = self.search.trim();
        if query.is_empty() {
            return true;
        }

        let query_lower = query.to_lowercase();
        if medicine.name.to_lowercase().contains(&query_lower)
            || medicine.manufacturer.to_lowercase().contains(&query_lower)
        {
            return true;
        }

        fuzzy_match(&query_lower, &medicine.name.to_lowercase()) >= FUZZY_MATCH_THRESHOLD
    }
}

/// Apply a filter and sort to the medicine list.
pub fn filter_and_sort(medicines: &[Medicine], filter: &InventoryFilter) -> Vec<Medicine> {
    let mut result: Vec<Medicine> = medicines
        .iter()
        .filter(|medicine| filter.matches(medicine))
        .cloned()
        .collect();

    match filter.sort {
        Some(SortKey::Name) => result.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::Price) => result.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        Some(SortKey::Quantity) => result.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
        // ISO dates sort correctly as strings
        Some(SortKey::Expiry) => result.sort_by(|a, b| a.expiry.cmp(&b.expiry)),
        None => {}
    }

    result
}

/// Dashboard tile values derived from the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    /// Total units on hand across all items
    pub total_stock: u64,
    /// Items below the low-stock threshold
    pub low_stock_count: usize,
    /// Items whose expiry date has passed
    pub expired_count: usize,
    /// Total inventory worth (price times stock)
    pub total_value: f64,
}

/// Summarize the inventory as of `today`.
pub fn summarize(medicines: &[Medicine], today: NaiveDate) -> InventorySummary {
    InventorySummary {
        total_stock: medicines.iter().map(|m| u64::from(m.quantity)).sum(),
        low_stock_count: medicines.iter().filter(|m| m.is_low_stock()).count(),
        expired_count: medicines.iter().filter(|m| m.is_expired(today)).count(),
        total_value: medicines.iter().map(Medicine::stock_value).sum(),
    }
}

/// Combined fuzzy similarity: Jaro-Winkler weighted for prefix typos,
/// Levenshtein for overall shape.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_medicine(name: &str, category: &str, price: f64, quantity: u32, expiry: &str) -> Medicine {
        let mut med = Medicine::new(name.to_lowercase().replace(' ', "-"), name.into(), category.into(), price);
        med.quantity = quantity;
        med.expiry = expiry.into();
        med.manufacturer = "Cipla".into();
        med
    }

    fn sample_inventory() -> Vec<Medicine> {
        vec![
            make_medicine("Paracetamol 500mg", "Pain Relief", 50.0, 120, "2026-10-01"),
            make_medicine("Amoxicillin 250mg", "Antibiotic", 120.0, 8, "2024-01-01"),
            make_medicine("Vitamin C 1000mg", "Vitamin", 200.0, 45, "2027-05-01"),
            make_medicine("Betadine Solution", "Antiseptic", 95.0, 3, "2026-02-15"),
        ]
    }

    #[test]
    fn test_category_filter() {
        let inventory = sample_inventory();
        let filter = InventoryFilter {
            category: Some("Antibiotic".into()),
            ..Default::default()
        };

        let result = filter_and_sort(&inventory, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Amoxicillin 250mg");
    }

    #[test]
    fn test_substring_search() {
        let inventory = sample_inventory();
        let filter = InventoryFilter {
            search: "vitamin".into(),
            ..Default::default()
        };

        let result = filter_and_sort(&inventory, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Vitamin C 1000mg");
    }

    #[test]
    fn test_fuzzy_search_tolerates_typo() {
        let inventory = sample_inventory();
        let filter = InventoryFilter {
            search: "paracetamoll 500mg".into(),
            ..Default::default()
        };

        let result = filter_and_sort(&inventory, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Paracetamol 500mg");
    }

    #[test]
    fn test_search_by_manufacturer() {
        let inventory = sample_inventory();
        let filter = InventoryFilter {
            search: "cipla".into(),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&inventory, &filter).len(), 4);
    }

    #[test]
    fn test_sort_orders() {
        let inventory = sample_inventory();

        let by_price = filter_and_sort(
            &inventory,
            &InventoryFilter {
                sort: Some(SortKey::Price),
                ..Default::default()
            },
        );
        assert_eq!(by_price[0].name, "Paracetamol 500mg");
        assert_eq!(by_price[3].name, "Vitamin C 1000mg");

        let by_quantity = filter_and_sort(
            &inventory,
            &InventoryFilter {
                sort: Some(SortKey::Quantity),
                ..Default::default()
            },
        );
        assert_eq!(by_quantity[0].name, "Betadine Solution");

        let by_expiry = filter_and_sort(
            &inventory,
            &InventoryFilter {
                sort: Some(SortKey::Expiry),
                ..Default::default()
            },
        );
        assert_eq!(by_expiry[0].name, "Amoxicillin 250mg");
    }

    #[test]
    fn test_summary() {
        let inventory = sample_inventory();
        let summary = summarize(&inventory, date("2025-06-01"));

        assert_eq!(summary.total_stock, 176);
        // Amoxicillin (8) and Betadine (3) sit below the threshold
        assert_eq!(summary.low_stock_count, 2);
        // Only Amoxicillin has expired by mid-2025
        assert_eq!(summary.expired_count, 1);

        let expected_value = 50.0 * 120.0 + 120.0 * 8.0 + 200.0 * 45.0 + 95.0 * 3.0;
        assert!((summary.total_value - expected_value).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_inventory_summary() {
        let summary = summarize(&[], date("2025-06-01"));
        assert_eq!(summary.total_stock, 0);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.expired_count, 0);
        assert_eq!(summary.total_value, 0.0);
    }

    #[test]
    fn test_fuzzy_match_behaviour() {
        assert!(fuzzy_match("paracetamol", "paracetamol") > 0.99);
        assert!(fuzzy_match("paracetamol", "paracetamoll") > 0.9); // Typo
        assert!(fuzzy_match("paracetamol", "betadine") < 0.5); // Different product
    }
}
