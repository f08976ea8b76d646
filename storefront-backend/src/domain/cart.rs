// src/domain/cart.rs

//! カートの状態管理
//!
//! 挿入順を保持したカート明細と開閉状態を持つ純粋なデータ構造。
//! 永続化もI/Oも行わず、合計値は常に現在の明細から計算する。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// カート明細
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItem {
    /// 単価 × 数量（桁あふれ時はNone）
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の明細から復元（同一IDはマージ、数量0は捨てる）
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            let quantity = item.quantity;
            cart.add_item(item, quantity);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// 同じ商品IDがあれば数量を加算、なければ末尾に追加
    pub fn add_item(&mut self, item: CartItem, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem { quantity, ..item });
    }

    /// 数量1未満は無視（削除はremove_itemで行う）
    pub fn update_quantity(&mut self, id: &str, new_quantity: u32) {
        if new_quantity < 1 {
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = new_quantity;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// 明細の合計金額（Decimalの表現範囲を超える場合はNone）
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |acc, line| {
            line.line_total().and_then(|total| acc.checked_add(total))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- UI状態 ---

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// ドロワーのヘッダーに表示する文言
    pub fn summary_label(&self) -> String {
        match self.total_items() {
            0 => "Your cart is empty".to_string(),
            1 => "You have 1 item in your cart".to_string(),
            n => format!("You have {} items in your cart", n),
        }
    }

    pub fn summary(&self) -> Option<CartSummary> {
        Some(CartSummary {
            items: self.items.clone(),
            total_items: self.total_items(),
            subtotal: self.subtotal()?,
            label: self.summary_label(),
        })
    }
}

/// APIで返すカートの集計
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub subtotal: Decimal,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: Decimal) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Audio".to_string(),
            image: format!("https://images.example.com/{}.jpg", id),
            price,
            quantity: 1,
        }
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 1);
        cart.add_item(item("1", Decimal::from(10)), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), Some(Decimal::from(30)));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_item(item("b", Decimal::from(5)), 1);
        cart.add_item(item("a", Decimal::from(7)), 1);
        cart.add_item(item("b", Decimal::from(5)), 1);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_add_with_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_below_one_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 2);
        let before = cart.clone();

        cart.update_quantity("1", 0);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::new(1999, 2)), 1);
        cart.update_quantity("1", 4);

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.subtotal(), Some(Decimal::new(7996, 2)));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 1);
        cart.update_quantity("missing", 5);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_item_regardless_of_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 5);
        cart.add_item(item("2", Decimal::from(3)), 1);

        cart.remove_item("1");

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.subtotal(), Some(Decimal::from(3)));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::from(10)), 5);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_items_tracks_sum_over_operation_sequence() {
        let mut cart = Cart::new();
        let ops: Vec<Box<dyn Fn(&mut Cart)>> = vec![
            Box::new(|c| c.add_item(item("1", Decimal::from(1)), 2)),
            Box::new(|c| c.add_item(item("2", Decimal::from(2)), 3)),
            Box::new(|c| c.update_quantity("1", 0)),
            Box::new(|c| c.update_quantity("2", 1)),
            Box::new(|c| c.remove_item("1")),
            Box::new(|c| c.add_item(item("3", Decimal::from(3)), 4)),
            Box::new(|c| c.remove_item("missing")),
        ];

        for op in ops {
            op(&mut cart);
            let expected: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
            assert_eq!(cart.total_items(), expected);
            assert!(cart.items().iter().all(|i| i.quantity >= 1));
        }
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_from_items_merges_duplicates_and_drops_zero() {
        let mut zero = item("z", Decimal::from(1));
        zero.quantity = 0;
        let mut two = item("1", Decimal::from(10));
        two.quantity = 2;

        let cart = Cart::from_items(vec![item("1", Decimal::from(10)), zero, two]);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_open_close_toggle() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());
        cart.open();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());
        cart.toggle();
        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_summary_label() {
        let mut cart = Cart::new();
        assert_eq!(cart.summary_label(), "Your cart is empty");
        cart.add_item(item("1", Decimal::from(1)), 1);
        assert_eq!(cart.summary_label(), "You have 1 item in your cart");
        cart.add_item(item("2", Decimal::from(1)), 2);
        assert_eq!(cart.summary_label(), "You have 3 items in your cart");
    }

    #[test]
    fn test_subtotal_overflow_is_none() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::MAX), 2);
        assert_eq!(cart.items()[0].line_total(), None);
        assert_eq!(cart.subtotal(), None);
        assert!(cart.summary().is_none());

        // 各明細は収まっても合計で桁あふれする場合
        let mut cart = Cart::new();
        cart.add_item(item("a", Decimal::MAX), 1);
        cart.add_item(item("b", Decimal::MAX), 1);
        assert!(cart.items()[0].line_total().is_some());
        assert_eq!(cart.subtotal(), None);
    }

    #[test]
    fn test_summary_totals() {
        let mut cart = Cart::new();
        cart.add_item(item("1", Decimal::new(19999, 2)), 3);

        let summary = cart.summary().unwrap();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.subtotal, Decimal::new(59997, 2));
        assert_eq!(summary.label, "You have 3 items in your cart");
    }
}
