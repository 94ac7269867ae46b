//! Draft Cart
//!
//! The unsaved list of line items behind the request form.

use crate::models::{CatalogItem, LineItem};

/// Ordered draft with unique (description, brand) keys and quantities >= 1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftCart {
    items: Vec<LineItem>,
}

impl DraftCart {
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &CatalogItem) -> bool {
        self.items.iter().any(|line| line.key() == item.key())
    }

    /// Append with quantity 1; returns false when the key is already present
    pub fn add(&mut self, item: CatalogItem) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(LineItem::from_catalog(item));
        true
    }

    /// Set the quantity from raw input text. Anything below 1 becomes 1.
    /// Returns false for an out-of-range index.
    pub fn update_quantity(&mut self, index: usize, raw: &str) -> bool {
        match self.items.get_mut(index) {
            Some(line) => {
                line.quantity = parse_quantity(raw);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Load a saved request's items (copied) into the draft.
    /// Duplicate keys keep the first occurrence and quantities are clamped.
    pub fn replace_with(&mut self, items: &[LineItem]) {
        self.items.clear();
        for item in items {
            if self.items.iter().any(|line| line.key() == item.key()) {
                continue;
            }
            let mut line = item.clone();
            line.quantity = line.quantity.max(1);
            self.items.push(line);
        }
    }

    /// Request body for POST/PUT
    pub fn payload(&self) -> Vec<LineItem> {
        self.items.clone()
    }
}

/// Read the leading integer of a number field, the way a browser would.
/// Empty, non-numeric, zero and negative input all normalize to 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        // more digits than fit
        Err(_) => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(description: &str, brand: Option<&str>, cost: f64) -> CatalogItem {
        CatalogItem {
            item_description: description.to_string(),
            item_brand: brand.map(str::to_string),
            supplier: Some("Supplier".to_string()),
            unit_cost: cost,
        }
    }

    #[test]
    fn test_add_same_key_twice() {
        let mut cart = DraftCart::default();
        assert!(cart.add(catalog("Gauze", Some("A"), 10.0)));
        assert!(!cart.add(catalog("Gauze", Some("A"), 12.0)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].unit_cost, 10.0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_same_description_other_brand_is_distinct() {
        let mut cart = DraftCart::default();
        cart.add(catalog("Gauze", Some("A"), 10.0));
        cart.add(catalog("Gauze", Some("B"), 11.0));
        cart.add(catalog("Gauze", None, 9.0));

        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = DraftCart::default();
        cart.add(catalog("Gauze", Some("A"), 10.0));

        cart.update_quantity(0, "-3");
        assert_eq!(cart.items()[0].quantity, 1);
        cart.update_quantity(0, "0");
        assert_eq!(cart.items()[0].quantity, 1);
        cart.update_quantity(0, "7");
        assert_eq!(cart.items()[0].quantity, 7);
        cart.update_quantity(0, "abc");
        assert_eq!(cart.items()[0].quantity, 1);

        assert!(!cart.update_quantity(5, "2"));
    }

    #[test]
    fn test_update_then_remove_example() {
        let mut cart = DraftCart::default();
        cart.add(catalog("Gauze", Some("A"), 10.0));
        cart.update_quantity(0, "-3");
        assert_eq!(cart.items()[0].quantity, 1);

        cart.remove(0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut cart = DraftCart::default();
        cart.add(catalog("A", None, 1.0));
        cart.add(catalog("B", None, 2.0));
        cart.add(catalog("C", None, 3.0));
        cart.add(catalog("D", None, 4.0));

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.item_description, "B");

        let names: Vec<_> = cart.items().iter().map(|i| i.item_description.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert!(cart.remove(3).is_none());
    }

    #[test]
    fn test_replace_with_copies_and_dedups() {
        let saved = vec![
            LineItem { quantity: 4, ..LineItem::from_catalog(catalog("A", None, 1.0)) },
            LineItem { quantity: 0, ..LineItem::from_catalog(catalog("B", None, 2.0)) },
            LineItem { quantity: 9, ..LineItem::from_catalog(catalog("A", None, 1.0)) },
        ];
        let mut cart = DraftCart::default();
        cart.add(catalog("Old", None, 5.0));
        cart.replace_with(&saved);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1].quantity, 1);
        // the saved record is untouched
        assert_eq!(saved[1].quantity, 0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity(" 3 "), 3);
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity("+5"), 5);
        assert_eq!(parse_quantity("-1"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("x2"), 1);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }
}
