//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the bridge:
//! - Math types and matrix layout helpers
//! - Logging utilities

pub mod math;
pub mod logging;
