//! Bundler configuration.
//!
//! There is no config file and no environment lookup: the production URLs are
//! compiled in and the paths are derived from the program's own directory.
//! Everything is still carried in a [`BundleConfig`] value injected into the
//! pipeline entry points, so tests can substitute paths and URLs.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, WeroBundlerError};

/// URL of the canonical source repository, recorded in the output document.
pub const DATA_SOURCE_URL: &str = "https://github.com/wero-tracker/wero-tracker-data";

/// Base URL under which the raw repository content is served. Logo references
/// in bank records are resolved against this. The trailing slash matters for
/// URL joining.
pub const RAW_CONTENT_BASE: &str =
    "https://raw.githubusercontent.com/sharknoon/wero-tracker-data/main/";

/// Name of the per-country data tree directory.
pub const DATA_DIR_NAME: &str = "data";

/// Name of the per-bank record file inside each bank directory.
pub const DATA_FILE_NAME: &str = "data.json";

/// Name of the bundled output artifact.
pub const OUTPUT_FILE_NAME: &str = "data.json";

/// Immutable configuration for one bundling run.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Root of the country/bank data tree.
    pub data_dir: PathBuf,
    /// Where the bundled document is written (overwritten each run).
    pub output_path: PathBuf,
    /// Provenance URL recorded as `dataSource` in the output.
    pub data_source: Url,
    /// Base URL for resolving relative logo references.
    pub raw_content_base: Url,
}

impl BundleConfig {
    /// Build the conventional configuration for a repository root: data tree
    /// at `<root>/data`, output at `<root>/data.json`, production URLs.
    pub fn for_root(root: &Path) -> Result<Self> {
        Ok(Self {
            data_dir: root.join(DATA_DIR_NAME),
            output_path: root.join(OUTPUT_FILE_NAME),
            data_source: parse_url(DATA_SOURCE_URL)?,
            raw_content_base: parse_url(RAW_CONTENT_BASE)?,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| WeroBundlerError::config(format!("invalid URL '{raw}': {e}")))
}
