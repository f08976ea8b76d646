// src/domain/catalog.rs

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 全カテゴリを表す疑似カテゴリ
pub const ALL_CATEGORIES: &str = "Todos";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("valid regex"));

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub price: Decimal,
    pub rating: f32,
}

impl Product {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// 値引き中かどうか
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

/// "Todos" + 重複なしカテゴリの昇順
pub fn categories(products: &[Product]) -> Vec<String> {
    let distinct: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category == ALL_CATEGORIES {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.category == category).collect()
}

pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-");
    NON_SLUG_CHARS.replace_all(&dashed, "").into_owned()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    photo: &str,
    in_stock: bool,
    original_price: i64,
    price: i64,
    rating: f32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        image: format!(
            "https://images.unsplash.com/{}?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            photo
        ),
        in_stock,
        original_price: Some(Decimal::new(original_price, 2)),
        price: Decimal::new(price, 2),
        rating,
    }
}

/// ストアフロントの商品一覧
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Fones de Ouvido Premium Sem Fio",
            "Áudio",
            "photo-1505740420928-5e560c06d30e",
            true,
            24999,
            19999,
            4.5,
        ),
        product(
            "2",
            "Smart Watch Série 5",
            "Vestíveis",
            "photo-1523275335684-37898b6baf30",
            true,
            34999,
            29999,
            4.2,
        ),
        product(
            "3",
            "Kit de Câmera Profissional",
            "Fotografia",
            "photo-1526170375885-4d8ecf77b99f",
            false,
            149999,
            129999,
            4.8,
        ),
        product(
            "4",
            "Cadeira de Escritório Ergonômica",
            "Móveis",
            "photo-1506377295352-e3154d43ea9e",
            true,
            29999,
            24999,
            4.6,
        ),
        product(
            "5",
            "Smartphone Pro Max",
            "Eletrônicos",
            "photo-1511707171634-5f897ff02aa9",
            true,
            109999,
            99999,
            4.9,
        ),
        product(
            "6",
            "Smart TV Ultra HD 55\"",
            "Eletrônicos",
            "photo-1593784991095-a205069470b6",
            true,
            89999,
            79999,
            4.7,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_start_with_all_and_are_sorted() {
        let products = seed_products();
        let categories = categories(&products);

        assert_eq!(categories[0], ALL_CATEGORIES);
        assert_eq!(
            &categories[1..],
            &["Eletrônicos", "Fotografia", "Móveis", "Vestíveis", "Áudio"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let products = seed_products();

        assert_eq!(filter_by_category(&products, ALL_CATEGORIES).len(), 6);

        let electronics = filter_by_category(&products, "Eletrônicos");
        let ids: Vec<&str> = electronics.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);

        assert!(filter_by_category(&products, "Unknown").is_empty());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Smart Watch Série 5"), "smart-watch-srie-5");
        assert_eq!(slugify("Smart TV Ultra HD 55\""), "smart-tv-ultra-hd-55");
        assert_eq!(slugify("  Multiple   Spaces "), "-multiple-spaces-");
        assert_eq!(slugify("a/b?c"), "abc");
    }

    #[test]
    fn test_is_on_sale() {
        let products = seed_products();
        assert!(products.iter().all(Product::is_on_sale));

        let mut full_price = products[0].clone();
        full_price.original_price = None;
        assert!(!full_price.is_on_sale());
    }
}
