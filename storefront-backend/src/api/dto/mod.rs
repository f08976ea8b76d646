// src/api/dto/mod.rs
pub mod admin_dto;
pub mod cart_dto;
pub mod catalog_dto;
pub mod common;
pub mod payment_dto;
pub mod subscription_dto;
pub mod system_dto;
