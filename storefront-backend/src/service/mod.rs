// src/service/mod.rs
pub mod admin_report_service;
pub mod diagnostics_service;
pub mod polar_client;
pub mod subscription_sync_service;
