// src/repository/mod.rs
pub mod polar_customer_repository;
pub mod polar_subscription_repository;
pub mod upload_repository;
pub mod user_repository;
