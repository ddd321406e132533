//! Shared types, error model, and configuration for the Wero data bundler.
//!
//! This crate is the foundation depended on by the other werobundler crates.
//! It provides:
//! - [`WeroBundlerError`] — the unified error type
//! - Domain types ([`Bank`], [`Country`], [`WeroData`], [`RawBank`])
//! - Configuration ([`BundleConfig`] and the fixed production URLs)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    BundleConfig, DATA_DIR_NAME, DATA_FILE_NAME, DATA_SOURCE_URL, OUTPUT_FILE_NAME,
    RAW_CONTENT_BASE,
};
pub use error::{Result, WeroBundlerError};
pub use types::{AppAvailability, Bank, Country, Features, RawBank, WeroData};
