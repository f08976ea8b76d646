// src/config/mod.rs
pub mod app;
pub mod polar;

pub use app::AppConfig;
pub use polar::{PolarConfig, PolarEnvironment};

// Backward compatibility
pub type Config = AppConfig;
