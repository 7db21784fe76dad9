// ==========================================
// Snackhouse POS - Import/export orchestration
// ==========================================
// Drives the full workflows the back office exposes:
// workbook import (read, screen, parse, submit), sales
// report export, template download and analytics refresh.
// At most one import runs at a time.
// ==========================================

use crate::analytics::{AnalyticsEngine, CategoryOverrideTable, CategoryResolver, SalesAnalytics};
use crate::client::{resolve_acting_user, ClientError, IdentityProvider, PosClient};
use crate::config::ClientConfig;
use crate::export::{
    build_export, build_import_template, build_sales_report, report_file_name, ExportError,
};
use crate::importer::{ImportError, RawRow, RowParser, WorkbookReader};
use chrono::Local;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Rows shown in the pre-submit confirmation view.
pub const PREVIEW_ROW_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("an import is already running")]
    ImportInProgress,

    #[error("no importable rows found in the file")]
    NoUsableRows,

    #[error("no completed orders to export")]
    NothingToExport,

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Api(#[from] ClientError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;

/// Outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Orders submitted to the backend.
    pub submitted: usize,
    /// Orders the backend accepted.
    pub accepted: usize,
    /// Rows dropped before submission for carrying no
    /// identifying data.
    pub skipped_rows: usize,
    /// True when the backend rejected the whole batch on
    /// schema grounds.
    pub schema_rejected: bool,
}

/// A finished file download: suggested name plus bytes.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// Clears the in-flight flag even on early `?` returns.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct ImportExportOrchestrator {
    client: PosClient,
    identity: Arc<dyn IdentityProvider>,
    overrides: CategoryOverrideTable,
    store_name: String,
    import_in_flight: AtomicBool,
}

impl ImportExportOrchestrator {
    pub fn new(
        config: &ClientConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> OrchestratorResult<Self> {
        Ok(Self {
            client: PosClient::new(config)?,
            identity,
            overrides: config.override_table(),
            store_name: config.store_name.clone(),
            import_in_flight: AtomicBool::new(false),
        })
    }

    // ==========================================
    // Import
    // ==========================================

    /// Imports a spreadsheet of historical orders and
    /// submits them as one bulk batch.
    pub async fn import_workbook(&self, path: &Path) -> OrchestratorResult<ImportReport> {
        if self.import_in_flight.swap(true, Ordering::SeqCst) {
            return Err(OrchestratorError::ImportInProgress);
        }
        let _guard = InFlightGuard(&self.import_in_flight);

        let rows = WorkbookReader.read(path)?;
        let total_rows = rows.len();

        let usable: Vec<&RawRow> = rows.iter().filter(|r| RowParser::row_has_identity(r)).collect();
        let skipped_rows = total_rows - usable.len();
        if usable.is_empty() {
            return Err(OrchestratorError::NoUsableRows);
        }

        let acting_user = resolve_acting_user(self.identity.as_ref());
        let parser = RowParser::new();
        let orders: Vec<_> = usable
            .iter()
            .map(|row| parser.parse_row(row, &acting_user))
            .collect();

        info!(
            submitted = orders.len(),
            skipped = skipped_rows,
            "submitting bulk import"
        );
        let accepted = self.client.bulk_import_orders(&orders).await?;

        let schema_rejected = accepted == 0;
        if schema_rejected {
            warn!("backend accepted none of the submitted orders");
        }

        Ok(ImportReport {
            submitted: orders.len(),
            accepted,
            skipped_rows,
            schema_rejected,
        })
    }

    /// First few usable rows of a workbook, for the
    /// confirmation view shown before an import.
    pub fn preview_rows(&self, path: &Path) -> OrchestratorResult<Vec<RawRow>> {
        let rows = WorkbookReader.read(path)?;
        Ok(rows
            .into_iter()
            .filter(|r| RowParser::row_has_identity(r))
            .take(PREVIEW_ROW_LIMIT)
            .collect())
    }

    // ==========================================
    // Export
    // ==========================================

    /// Builds the downloadable sales report from the
    /// current order history.
    pub async fn export_sales_report(&self) -> OrchestratorResult<ExportedFile> {
        let orders = self.client.list_orders().await?;
        let (rows, summary) = build_export(&orders);
        if rows.is_empty() {
            return Err(OrchestratorError::NothingToExport);
        }

        info!(orders = rows.len(), revenue = summary.total_revenue, "exporting sales report");
        let bytes = build_sales_report(&self.store_name, &rows, &summary)?;
        Ok(ExportedFile {
            file_name: report_file_name(Local::now().date_naive()),
            bytes,
        })
    }

    /// Blank import template workbook.
    pub fn import_template(&self) -> OrchestratorResult<ExportedFile> {
        let bytes = build_import_template()?;
        Ok(ExportedFile {
            file_name: crate::export::TEMPLATE_FILE_NAME.to_string(),
            bytes,
        })
    }

    // ==========================================
    // Analytics
    // ==========================================

    /// Fetches orders and the live menu and derives the
    /// full dashboard dataset.
    pub async fn sales_analytics(&self) -> OrchestratorResult<SalesAnalytics> {
        let orders = self.client.list_orders().await?;
        let menu = self.client.list_menu().await?;

        let resolver = CategoryResolver::new(&menu, self.overrides.clone());
        Ok(AnalyticsEngine::new(&resolver).aggregate(&orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_guard_resets_on_drop() {
        let flag = AtomicBool::new(false);
        assert!(!flag.swap(true, Ordering::SeqCst));
        {
            let _guard = InFlightGuard(&flag);
        }
        assert!(!flag.load(Ordering::SeqCst));
        // A second run may start once the first has dropped
        // its guard.
        assert!(!flag.swap(true, Ordering::SeqCst));
    }
}
