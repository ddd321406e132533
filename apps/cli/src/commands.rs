//! CLI definition, tracing setup, and the single bundling command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use werobundler_shared::BundleConfig;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// werobundler — bundle the Wero availability data tree into data.json.
///
/// Takes no arguments: the data tree and the output location are both
/// resolved relative to the bundler binary's own directory, so the tool
/// behaves the same regardless of the invocation working directory.
#[derive(Parser)]
#[command(
    name = "werobundler",
    version,
    about = "Bundle per-bank Wero availability records into a single data.json.",
    long_about = None,
)]
pub(crate) struct Cli {}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing. Default filter is `werobundler=info`, overridable via
/// `RUST_LOG`.
pub(crate) fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("werobundler=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the bundling pipeline and print the summary.
pub(crate) fn run(_cli: Cli) -> Result<()> {
    let root = program_dir()?;
    let config = BundleConfig::for_root(&root)?;

    info!(
        data_dir = %config.data_dir.display(),
        output = %config.output_path.display(),
        "bundling data tree"
    );

    let result = werobundler_core::run(&config)?;

    println!("✓ Bundled data written to {}", result.output_path.display());
    println!("  - {} countries", result.country_count);
    println!("  - {} banks total", result.bank_count);

    Ok(())
}

/// Directory containing the running executable. The data tree and output
/// artifact live next to the binary, not under the invocation cwd.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| eyre!("cannot determine program location: {e}"))?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| eyre!("program path '{}' has no parent directory", exe.display()))
}
