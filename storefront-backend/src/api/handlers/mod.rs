// src/api/handlers/mod.rs
pub mod admin_handler;
pub mod cart_handler;
pub mod catalog_handler;
pub mod payment_handler;
pub mod subscription_handler;
pub mod system_handler;
