// src/domain/mod.rs
pub mod cart;
pub mod catalog;
pub mod polar_customer_model;
pub mod polar_subscription_model;
pub mod upload_model;
pub mod user_model;
