// src/api/dto/catalog_dto.rs

use crate::domain::catalog::{Product, ALL_CATEGORIES};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
    pub on_sale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub price: Decimal,
    pub rating: f32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug(),
            category: product.category.clone(),
            image: product.image.clone(),
            in_stock: product.in_stock,
            on_sale: product.is_on_sale(),
            original_price: product.original_price,
            price: product.price,
            rating: product.rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
