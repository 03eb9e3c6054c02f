use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::RngCore;
use serde::Serialize;
use synthema_core::SchemaGenerator;
use tracing::{debug, warn};

use crate::{CliError, compile_validator, read_schema, validation_errors};

/// Outcome counts for a directory of schemas.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SurveyReport {
    pub total: u64,
    pub success: u64,
    pub invalid: u64,
    pub skipped: u64,
    /// Generation failures keyed by error kind.
    #[serde(flatten)]
    pub failures: BTreeMap<String, u64>,
}

impl SurveyReport {
    fn record_failure(&mut self, kind: &str) {
        *self.failures.entry(kind.to_string()).or_insert(0) += 1;
    }
}

/// Generate one value per `*.json` file in `dir` and validate it.
///
/// Files that cannot be read or parsed are skipped and not counted in `total`.
pub fn survey_dir(
    dir: &Path,
    generator: &SchemaGenerator,
    rng: &mut dyn RngCore,
) -> Result<SurveyReport, CliError> {
    let mut report = SurveyReport::default();
    for path in schema_files(dir)? {
        let schema = match read_schema(&path) {
            Ok(schema) => schema,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "schema skipped");
                report.skipped += 1;
                continue;
            }
        };
        report.total += 1;

        let value = match generator.generate(&schema, rng) {
            Ok(value) => value,
            Err(err) => {
                debug!(path = %path.display(), kind = err.kind(), "generation failed");
                report.record_failure(err.kind());
                continue;
            }
        };

        let valid = match compile_validator(&schema) {
            Ok(validator) => validation_errors(&validator, &value).is_empty(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "validator unavailable");
                false
            }
        };
        if valid {
            report.success += 1;
        } else {
            debug!(path = %path.display(), "sample failed validation");
            report.invalid += 1;
        }
    }
    Ok(report)
}

fn schema_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
