//! Domain types for the bundled Wero availability data.
//!
//! Two families live here: [`RawBank`] mirrors the contributor-maintained
//! `data.json` files, and [`Bank`]/[`Country`]/[`WeroData`] are the bundled
//! output shapes consumed by the web client. All output types serialize in
//! camelCase and omit absent optional fields entirely — the client treats a
//! missing key as "unknown", which is different from `false` or `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wero capability flags for a bank.
///
/// Each flag is tri-state: supported, unsupported, or not yet researched.
/// The last case is an absent key in both source and output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    /// Peer-to-peer transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2p: Option<bool>,

    /// Online (e-commerce) payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_payments: Option<bool>,

    /// In-store (point of sale) payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_payments: Option<bool>,
}

/// Where a customer of this bank can use Wero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAvailability {
    /// Available in the standalone Wero app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wero_app: Option<bool>,

    /// Available inside the bank's own banking app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banking_app: Option<bool>,
}

/// The raw shape of a contributor `data.json` file.
///
/// `status` is a passthrough string — the source format does not constrain it
/// to a closed set, and rejecting unknown values here would turn an editorial
/// addition upstream into a hard bundling failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBank {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub app_availability: AppAvailability,
    /// Logo filename relative to the bank's directory (e.g. `logo.svg`).
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Citations backing the recorded capabilities.
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// One bank's entry in the bundled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Stable identifier — the bank's source directory name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Availability status (passthrough from the source record).
    pub status: String,
    /// Wero capability flags.
    pub features: Features,
    /// App availability flags.
    pub app_availability: AppAvailability,
    /// Modification time of the source `data.json` — provenance, not content.
    pub last_updated: DateTime<Utc>,
    /// Absolute URL of the bank's logo, if one is declared in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Bank website, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Citations, present only when the source list is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    /// Free-form editorial note, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// All banks of one country, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Uppercased country code (the data directory name).
    pub code: String,
    pub banks: Vec<Bank>,
}

/// The bundled `data.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeroData {
    /// When this bundle was generated (distinct from per-bank `lastUpdated`).
    pub last_updated: DateTime<Utc>,
    /// URL of the canonical source repository.
    pub data_source: String,
    /// Countries with at least one bank, sorted by code.
    pub countries: Vec<Country>,
}
