//! Cart snapshot.
//!
//! A [`Cart`] is never mutated in place; every operation returns a new
//! snapshot so screens holding an older one are unaffected.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    /// Price in the currency's minor unit.
    pub unit_price_minor: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_minor(&self) -> u64 {
        self.unit_price_minor.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of a product. An existing line keeps its position and
    /// price and has its quantity increased.
    pub fn with_item(&self, product_id: &str, unit_price_minor: u64, quantity: u32) -> Self {
        if quantity == 0 {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => lines.push(CartLine {
                product_id: product_id.to_string(),
                unit_price_minor,
                quantity,
            }),
        }
        Self { lines }
    }

    /// Set the quantity of an existing line; zero removes it. Unknown
    /// products leave the cart unchanged.
    pub fn with_quantity(&self, product_id: &str, quantity: u32) -> Self {
        if quantity == 0 {
            return self.without(product_id);
        }
        let lines = self
            .lines
            .iter()
            .cloned()
            .map(|mut line| {
                if line.product_id == product_id {
                    line.quantity = quantity;
                }
                line
            })
            .collect();
        Self { lines }
    }

    pub fn without(&self, product_id: &str) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|line| line.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    pub fn total_minor(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal_minor()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_same_product_merges_lines() {
        let cart = Cart::new()
            .with_item("ramen", 1_500, 2)
            .with_item("kimchi", 8_000, 1)
            .with_item("ramen", 1_500, 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total_minor(), 3 * 1_500 + 8_000);
    }

    #[test]
    fn operations_return_new_snapshots() {
        let before = Cart::new().with_item("ramen", 1_500, 1);
        let after = before.with_quantity("ramen", 5);

        assert_eq!(before.item_count(), 1);
        assert_eq!(after.item_count(), 5);
    }

    #[test]
    fn zero_quantity_removes_line() {
        let cart = Cart::new()
            .with_item("ramen", 1_500, 1)
            .with_quantity("ramen", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn unknown_product_quantity_change_is_ignored() {
        let cart = Cart::new().with_item("ramen", 1_500, 1);
        assert_eq!(cart.with_quantity("soju", 3), cart);
    }

    #[test]
    fn cleared_cart_has_zero_total() {
        let cart = Cart::new().with_item("ramen", 1_500, 1).cleared();
        assert_eq!(cart.total_minor(), 0);
    }
}
