//! Per-country aggregation.
//!
//! Walks the bank subdirectories of one country directory, reads each record,
//! and produces a [`Country`] with its banks sorted by display name.

use std::path::Path;

use tracing::debug;

use werobundler_shared::{BundleConfig, Country, Result, WeroBundlerError};

use crate::collate::NameCollator;
use crate::reader::read_bank;

/// Read all banks of one country.
///
/// Non-directory entries are ignored; banks without a `data.json` are dropped
/// by the reader. The returned country may have an empty `banks` list — the
/// bundle driver decides whether empty countries make it into the output.
///
/// The collator is passed in because building one loads the ICU collation
/// tables; the driver constructs a single instance for the whole run.
pub fn read_country(
    config: &BundleConfig,
    country_dir: &Path,
    country_code: &str,
    collator: &NameCollator,
) -> Result<Country> {
    let mut banks = Vec::new();

    let entries =
        std::fs::read_dir(country_dir).map_err(|e| WeroBundlerError::io(country_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| WeroBundlerError::io(country_dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| WeroBundlerError::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        let bank_id = entry.file_name().to_string_lossy().into_owned();
        if let Some(bank) = read_bank(config, &entry.path(), &bank_id, country_code)? {
            banks.push(bank);
        }
    }

    // Directory enumeration order is platform-dependent; the name sort makes
    // the output deterministic.
    banks.sort_by(|a, b| collator.compare(&a.name, &b.name));

    debug!(
        country = country_code,
        banks = banks.len(),
        "country aggregated"
    );

    Ok(Country {
        code: country_code.to_uppercase(),
        banks,
    })
}
