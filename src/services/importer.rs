//! Bulk contact import from tab-separated files.
//!
//! One import call processes rows strictly sequentially: each line becomes
//! a candidate, is validated, normalized, and persisted independently, and
//! per-row failures are aggregated into the report. Only file-level
//! problems (wrong extension, unreadable file) abort the batch.

use crate::domain::{Region, UserId};
use crate::error::{ImportError, ImportResult, StoreError};
use crate::models::ContactDraft;
use crate::repositories::ContactStore;
use crate::validation::{normalize, validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tab-separated columns per data row: first name, last name, email,
/// phone, company.
const FIELD_COUNT: usize = 5;

const DUPLICATE_MESSAGE: &str = "A duplicate entry for this contact already exists";
const UNEXPECTED_MESSAGE: &str = "An unexpected error has occurred while processing this line";

/// A structured failure record scoped to one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based data row index, header excluded
    pub row: usize,

    /// Human-readable failure messages for this row
    pub errors: Vec<String>,

    /// Raw field values of the rejected row, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Outcome of a bulk import: how many rows persisted, and which failed.
///
/// An empty `row_errors` list means the import was fully successful.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub row_errors: Vec<RowError>,
}

impl ImportReport {
    /// True when every data row persisted.
    pub fn is_success(&self) -> bool {
        self.row_errors.is_empty()
    }
}

enum RowOutcome {
    Saved,
    Failed {
        errors: Vec<String>,
        data: Option<String>,
    },
}

/// Bulk importer for `.tsv` contact files.
///
/// The first line of the file is a header and is always discarded. A bad
/// row never aborts the batch; the importer records the failure and moves
/// to the next line.
pub struct Importer {
    store: Arc<dyn ContactStore>,
    default_region: Region,
}

impl Importer {
    /// Create an importer backed by the given store.
    pub fn new(store: Arc<dyn ContactStore>, default_region: Region) -> Self {
        Self {
            store,
            default_region,
        }
    }

    /// Import contacts for `user` from a file on disk.
    ///
    /// # Errors
    ///
    /// - `ImportError::InvalidFileType` when the file name does not end in
    ///   `.tsv` (checked before any read or persistence attempt);
    /// - `ImportError::FileRead` when reading the file fails (I/O or
    ///   invalid UTF-8).
    pub async fn import_path(
        &self,
        user: &UserId,
        path: impl AsRef<Path>,
    ) -> ImportResult<ImportReport> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        Self::check_file_name(&file_name)?;

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| ImportError::FileRead(err.to_string()))?;

        self.import_lines(user, &file_name, contents.lines()).await
    }

    /// Import contacts from already-read lines, including the header line.
    ///
    /// `file_name` is still checked for the `.tsv` extension so callers
    /// holding an open handle get the same fail-fast behavior.
    pub async fn import_lines<'a, I>(
        &self,
        user: &UserId,
        file_name: &str,
        lines: I,
    ) -> ImportResult<ImportReport>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::check_file_name(file_name)?;

        let mut report = ImportReport::default();
        // First line is the header; data rows are 1-based after it.
        for (index, line) in lines.into_iter().skip(1).enumerate() {
            let row = index + 1;
            match self.import_row(user, line).await {
                RowOutcome::Saved => report.imported += 1,
                RowOutcome::Failed { errors, data } => {
                    debug!(row, ?errors, "import row failed");
                    report.row_errors.push(RowError { row, errors, data });
                }
            }
        }

        info!(
            user = %user,
            imported = report.imported,
            failed = report.row_errors.len(),
            "bulk import finished"
        );
        Ok(report)
    }

    fn check_file_name(file_name: &str) -> ImportResult<()> {
        if file_name.to_lowercase().ends_with(".tsv") {
            Ok(())
        } else {
            Err(ImportError::InvalidFileType(file_name.to_string()))
        }
    }

    async fn import_row(&self, user: &UserId, line: &str) -> RowOutcome {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return RowOutcome::Failed {
                errors: vec![format!(
                    "Expected {} tab-separated fields, found {}",
                    FIELD_COUNT,
                    fields.len()
                )],
                data: Some(line.to_string()),
            };
        }

        let draft = ContactDraft::from_fields(
            user.clone(),
            fields[0],
            fields[1],
            fields[2],
            fields[3],
            fields[4],
        );

        if let Err(errors) = validate(&draft, self.default_region) {
            return RowOutcome::Failed {
                errors: errors.into_iter().map(|e| e.message).collect(),
                data: Some(draft.raw_values()),
            };
        }

        // Normalization always runs before the persistence attempt.
        let draft = normalize(draft, self.default_region);

        match self.store.insert_unique(&draft).await {
            Ok(_) => RowOutcome::Saved,
            // A duplicate-key rejection at save time is the recovered
            // counterpart of the uniqueness invariant, possibly raced by
            // another writer; the batch continues.
            Err(StoreError::DuplicateContact) => RowOutcome::Failed {
                errors: vec![DUPLICATE_MESSAGE.to_string()],
                data: None,
            },
            Err(err) => {
                warn!(%err, "unexpected store failure for import row");
                RowOutcome::Failed {
                    errors: vec![UNEXPECTED_MESSAGE.to_string()],
                    data: None,
                }
            }
        }
    }
}
