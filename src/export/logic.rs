// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::models::report::PayReport;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export del report del periodo.
    ///
    /// - `format`: csv | json
    /// - `file`: path assoluto del file di output (`~/` accettato)
    /// - `force`: sovrascrive senza chiedere
    /// - `ask`: se il file esiste e manca `force`, chiede conferma su stdin
    pub fn export(
        report: &PayReport,
        anchor: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
        ask: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force, ask)?;

        let data = ReportExport::new(anchor, report);

        match format {
            ExportFormat::Csv => export_csv(&data, &path)?,
            ExportFormat::Json => export_json(&data, &path)?,
        }

        Ok(path)
    }
}
