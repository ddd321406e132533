//! Bundle driver: data tree → consolidated `data.json`.
//!
//! Enumerates the country directories under the data root, aggregates each
//! one, filters out countries without a single valid bank, and writes the
//! pretty-printed output document.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, instrument};

use werobundler_shared::{BundleConfig, Result, WeroBundlerError, WeroData};

use crate::collate::NameCollator;
use crate::country::read_country;

/// Outcome of a completed bundling run, for the CLI summary.
#[derive(Debug)]
pub struct BundleResult {
    /// Where the document was written.
    pub output_path: PathBuf,
    /// Countries included in the output.
    pub country_count: usize,
    /// Banks included across all countries.
    pub bank_count: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Assemble the output document from the data tree, without persisting it.
///
/// Fails if the data root is missing, if any present `data.json` is
/// malformed, or on any filesystem error. Countries with zero valid banks
/// are excluded; the rest are sorted ascending by code.
#[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
pub fn bundle(config: &BundleConfig) -> Result<WeroData> {
    if !config.data_dir.is_dir() {
        return Err(WeroBundlerError::MissingDataRoot {
            path: config.data_dir.clone(),
        });
    }

    let mut countries = Vec::new();

    // One collator for the whole run; construction loads the ICU tables.
    let collator = NameCollator::new();

    let entries = std::fs::read_dir(&config.data_dir)
        .map_err(|e| WeroBundlerError::io(&config.data_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| WeroBundlerError::io(&config.data_dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| WeroBundlerError::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        let country_code = entry.file_name().to_string_lossy().into_owned();
        let country = read_country(config, &entry.path(), &country_code, &collator)?;
        if country.banks.is_empty() {
            info!(country = %country.code, "no valid banks, excluding country");
            continue;
        }
        countries.push(country);
    }

    // Country codes are plain ASCII directory names; a byte sort is already
    // the natural alphabetical order here.
    countries.sort_by(|a, b| a.code.cmp(&b.code));

    Ok(WeroData {
        last_updated: Utc::now(),
        data_source: config.data_source.to_string(),
        countries,
    })
}

/// Run the full pipeline: bundle the data tree and persist the document to
/// `config.output_path`, overwriting any prior artifact.
///
/// Nothing is written when bundling fails, so a prior good artifact survives
/// a failed run untouched.
#[instrument(skip_all)]
pub fn run(config: &BundleConfig) -> Result<BundleResult> {
    let start = Instant::now();

    let data = bundle(config)?;
    write_json(&config.output_path, &data)?;

    let result = BundleResult {
        output_path: config.output_path.clone(),
        country_count: data.countries.len(),
        bank_count: data.countries.iter().map(|c| c.banks.len()).sum(),
        elapsed: start.elapsed(),
    };

    info!(
        countries = result.country_count,
        banks = result.bank_count,
        elapsed_ms = result.elapsed.as_millis(),
        output = %result.output_path.display(),
        "bundle complete"
    );

    Ok(result)
}

/// Write a JSON file (pretty-printed).
fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).map_err(|e| WeroBundlerError::io(path, e))
}
