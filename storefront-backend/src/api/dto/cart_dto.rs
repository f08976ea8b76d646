// src/api/dto/cart_dto.rs

use crate::domain::cart::{Cart, CartItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CartItemDto {
    #[validate(length(min = 1, message = "Item ID is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[validate(custom(function = "validate_non_negative_price"))]
    pub price: Decimal,
    pub quantity: u32,
}

fn validate_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        let mut error = ValidationError::new("negative_price");
        error.message = Some("Price must not be negative".into());
        return Err(error);
    }
    Ok(())
}

impl From<CartItemDto> for CartItem {
    fn from(dto: CartItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            category: dto.category,
            image: dto.image,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

/// クライアント側カートの集計リクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct CartSummaryRequest {
    #[validate(nested)]
    pub items: Vec<CartItemDto>,
}

impl CartSummaryRequest {
    pub fn into_cart(self) -> Cart {
        Cart::from_items(self.items.into_iter().map(CartItem::from))
    }
}
