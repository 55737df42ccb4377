//! # Core Bridge Module
//!
//! Shared configuration types used by host adapters and the converters.

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    BridgeConfig,
    LoggingConfig,
    RenderSettings,
    RenderCameraType,
    Config,
    ConfigError,
    ConfigFormat,
};
