//! Core bundling pipeline for the Wero data bundler.
//!
//! This crate walks the country/bank data tree, normalizes each bank record,
//! and assembles the bundled `data.json` document: reader → country
//! aggregator → bundle driver.

pub mod bundle;
pub mod collate;
pub mod country;
pub mod reader;

pub use bundle::{BundleResult, bundle, run};
