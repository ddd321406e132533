//! Per-bank record reader.
//!
//! Reads one bank's `data.json`, normalizes it into the output [`Bank`]
//! shape, and resolves the declared logo filename into an absolute URL. A
//! missing record file is the one recoverable condition in the pipeline: the
//! bank is skipped with a warning. A present-but-malformed file aborts the
//! run, because silently dropping it would mask a contributor error.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::warn;

use werobundler_shared::{Bank, BundleConfig, DATA_FILE_NAME, RawBank, Result, WeroBundlerError};

/// Read and normalize one bank's record.
///
/// Returns `Ok(None)` when `<bank_dir>/data.json` does not exist; the caller
/// omits the bank and the run continues.
pub fn read_bank(
    config: &BundleConfig,
    bank_dir: &Path,
    bank_id: &str,
    country_code: &str,
) -> Result<Option<Bank>> {
    let data_path = bank_dir.join(DATA_FILE_NAME);

    if !data_path.exists() {
        warn!(
            bank = bank_id,
            path = %bank_dir.display(),
            "data.json not found, skipping bank"
        );
        return Ok(None);
    }

    let content = std::fs::read_to_string(&data_path)
        .map_err(|e| WeroBundlerError::io(&data_path, e))?;
    let raw: RawBank =
        serde_json::from_str(&content).map_err(|e| WeroBundlerError::parse(&data_path, e))?;

    let last_updated = file_mtime(&data_path)?;

    // Contributors sometimes leave optional fields as empty strings; those
    // count as absent, same as a missing key.
    let logo = match raw.logo.as_deref().filter(|s| !s.is_empty()) {
        Some(filename) => Some(logo_url(config, country_code, bank_id, filename)?),
        None => None,
    };

    Ok(Some(Bank {
        id: bank_id.to_string(),
        name: raw.name,
        status: raw.status,
        features: raw.features,
        app_availability: raw.app_availability,
        last_updated,
        logo,
        website: raw.website.filter(|s| !s.is_empty()),
        sources: if raw.sources.is_empty() {
            None
        } else {
            Some(raw.sources)
        },
        note: raw.note.filter(|s| !s.is_empty()),
    }))
}

/// A file's modification time as UTC — the per-bank provenance timestamp.
fn file_mtime(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = std::fs::metadata(path).map_err(|e| WeroBundlerError::io(path, e))?;
    let modified = metadata.modified().map_err(|e| WeroBundlerError::io(path, e))?;
    Ok(DateTime::<Utc>::from(modified))
}

/// Resolve a logo filename declared in a bank record into an absolute URL
/// under the raw content base: `<base>/data/<country>/<bank>/<filename>`.
fn logo_url(
    config: &BundleConfig,
    country_code: &str,
    bank_id: &str,
    filename: &str,
) -> Result<String> {
    let relative = format!("data/{country_code}/{bank_id}/{filename}");
    let url = config
        .raw_content_base
        .join(&relative)
        .map_err(|e| WeroBundlerError::config(format!("cannot resolve logo '{relative}': {e}")))?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wb-reader-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn test_config(root: &Path) -> BundleConfig {
        BundleConfig::for_root(root).expect("config")
    }

    fn write_record(bank_dir: &Path, json: &str) {
        std::fs::create_dir_all(bank_dir).unwrap();
        std::fs::write(bank_dir.join(DATA_FILE_NAME), json).unwrap();
    }

    #[test]
    fn reads_and_normalizes_full_record() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/acme-bank");
        write_record(
            &bank_dir,
            r#"{
                "name": "Acme Bank",
                "status": "active",
                "features": {"p2p": true, "onlinePayments": false},
                "appAvailability": {"bankingApp": true},
                "logo": "logo.svg",
                "website": "https://acme.example",
                "sources": ["https://acme.example/press"],
                "note": "pilot program"
            }"#,
        );

        let config = test_config(&tmp);
        let bank = read_bank(&config, &bank_dir, "acme-bank", "de")
            .expect("read")
            .expect("present");

        assert_eq!(bank.id, "acme-bank");
        assert_eq!(bank.name, "Acme Bank");
        assert_eq!(bank.status, "active");
        assert_eq!(bank.features.p2p, Some(true));
        assert_eq!(bank.features.online_payments, Some(false));
        assert_eq!(bank.features.local_payments, None);
        assert_eq!(bank.app_availability.wero_app, None);
        assert_eq!(bank.app_availability.banking_app, Some(true));
        assert_eq!(bank.website.as_deref(), Some("https://acme.example"));
        assert_eq!(
            bank.sources.as_deref(),
            Some(&["https://acme.example/press".to_string()][..])
        );
        assert_eq!(bank.note.as_deref(), Some("pilot program"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn logo_is_rewritten_to_absolute_url() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/acme-bank");
        write_record(
            &bank_dir,
            r#"{"name": "Acme Bank", "status": "active", "logo": "logo.svg"}"#,
        );

        let config = test_config(&tmp);
        let bank = read_bank(&config, &bank_dir, "acme-bank", "de")
            .expect("read")
            .expect("present");

        assert_eq!(
            bank.logo.as_deref(),
            Some(
                "https://raw.githubusercontent.com/sharknoon/wero-tracker-data/main/data/de/acme-bank/logo.svg"
            )
        );

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_data_file_yields_none() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/ghost-bank");
        std::fs::create_dir_all(&bank_dir).unwrap();

        let config = test_config(&tmp);
        let result = read_bank(&config, &bank_dir, "ghost-bank", "de").expect("recoverable");
        assert!(result.is_none());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn malformed_data_file_is_fatal() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/broken-bank");
        write_record(&bank_dir, r#"{"name": "Broken""#);

        let config = test_config(&tmp);
        let err = read_bank(&config, &bank_dir, "broken-bank", "de").unwrap_err();
        assert!(matches!(err, WeroBundlerError::Parse { .. }));
        assert!(err.to_string().contains("broken-bank"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn empty_string_optionals_are_dropped() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/acme-bank");
        write_record(
            &bank_dir,
            r#"{"name": "Acme Bank", "status": "active", "logo": "", "website": "", "note": ""}"#,
        );

        let config = test_config(&tmp);
        let bank = read_bank(&config, &bank_dir, "acme-bank", "de")
            .expect("read")
            .expect("present");

        // An empty string counts as absent: no directory-only logo URL, no
        // empty website/note keys in the output.
        assert!(bank.logo.is_none());
        assert!(bank.website.is_none());
        assert!(bank.note.is_none());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_data_file_emits_warning() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

        impl Write for CaptureWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for CaptureWriter {
            type Writer = CaptureWriter;
            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let tmp = temp_dir();
        let bank_dir = tmp.join("de/ghost-bank");
        std::fs::create_dir_all(&bank_dir).unwrap();

        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .finish();

        let config = test_config(&tmp);
        let result = tracing::subscriber::with_default(subscriber, || {
            read_bank(&config, &bank_dir, "ghost-bank", "de")
        })
        .expect("recoverable");
        assert!(result.is_none());

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("data.json not found"));
        assert!(output.contains("ghost-bank"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn empty_sources_list_is_dropped() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/quiet-bank");
        write_record(
            &bank_dir,
            r#"{"name": "Quiet Bank", "status": "planned", "sources": []}"#,
        );

        let config = test_config(&tmp);
        let bank = read_bank(&config, &bank_dir, "quiet-bank", "de")
            .expect("read")
            .expect("present");
        assert!(bank.sources.is_none());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn last_updated_comes_from_file_metadata() {
        let tmp = temp_dir();
        let bank_dir = tmp.join("de/acme-bank");
        write_record(&bank_dir, r#"{"name": "Acme Bank", "status": "active"}"#);

        let config = test_config(&tmp);
        let before = Utc::now();
        let bank = read_bank(&config, &bank_dir, "acme-bank", "de")
            .expect("read")
            .expect("present");

        // The file was just written, so its mtime is recent regardless of
        // any timestamps in the record content.
        let age = before.signed_duration_since(bank.last_updated);
        assert!(age.num_seconds().abs() < 60);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
