//! Data export for payroll and external analysis.
//!
//! Writes monthly reports, closure snapshots and raw clockings as CSV, JSON
//! or Excel. Values are rounded to two decimals on the way out; the data
//! handed in is never modified.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos::libs::export::{Exporter, ExportFormat};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None, "report");
//! exporter.export_report(&report)?;
//! ```

use crate::libs::clocking::{duration, ClockingRecord};
use crate::libs::closure::ClosureWithDetails;
use crate::libs::formatter::{format_duration, format_hours, format_optional_timestamp, round_hours};
use crate::libs::messages::Message;
use crate::libs::report::MonthlyReport;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    /// Excel workbook with a bold header row.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub const REPORT_HEADERS: [&str; 4] = ["Employee", "Period", "Total Hours", "Exceeded Hours"];
const CLOSURE_DETAIL_HEADERS: [&str; 8] = ["Employee", "Email", "Total Hours", "Allowed Hours", "Exceeded Hours", "Clockings", "Status", "Notes"];
const CLOCKING_HEADERS: [&str; 8] = ["ID", "Employee ID", "Employee", "Start", "End", "Duration", "Status", "Description"];

#[derive(Debug, Serialize)]
struct ExportClocking {
    id: i64,
    employee_id: i64,
    employee_name: String,
    start_time: String,
    end_time: Option<String>,
    duration: String,
    status: String,
    description: Option<String>,
}

impl From<&ClockingRecord> for ExportClocking {
    fn from(record: &ClockingRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            employee_id: record.employee_id,
            employee_name: record.employee_name.clone(),
            start_time: record.start_time.to_rfc3339(),
            end_time: record.end_time.map(|end| end.to_rfc3339()),
            duration: format_duration(&duration(record)),
            status: record.status().to_string(),
            description: record.description.clone(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without an explicit path the file is named
    /// `chronos_<kind>_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, kind: &str) -> Self {
        let default_name = format!("chronos_{}_{}", kind, Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_report(&self, report: &MonthlyReport) -> Result<()> {
        let rows = report.export_rows();
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(REPORT_HEADERS)?;
                for row in &rows {
                    wtr.write_record([
                        row.employee_name.clone(),
                        row.period.clone(),
                        format_hours(row.total_hours),
                        format_hours(row.exceeded_hours),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(&rows)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                write_headers(worksheet, 0, &REPORT_HEADERS)?;

                for (i, row) in rows.iter().enumerate() {
                    let r = i as u32 + 1;
                    worksheet.write_string(r, 0, &row.employee_name)?;
                    worksheet.write_string(r, 1, &row.period)?;
                    worksheet.write_number(r, 2, row.total_hours)?;
                    worksheet.write_number(r, 3, row.exceeded_hours)?;
                }

                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_closure(&self, closure: &ClosureWithDetails) -> Result<()> {
        let header = closure_header(closure);
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;
                wtr.write_record(["MONTHLY CLOSURE"])?;
                for (label, value) in &header {
                    wtr.write_record([label.as_str(), value.as_str()])?;
                }
                wtr.write_record([""])?;
                wtr.write_record(CLOSURE_DETAIL_HEADERS)?;
                for detail in &closure.details {
                    wtr.write_record([
                        detail.employee_name.clone(),
                        detail.employee_email.clone().unwrap_or_default(),
                        format_hours(detail.total_hours),
                        format_hours(detail.allowed_hours),
                        format_hours(detail.exceeded_hours),
                        detail.total_clockings.to_string(),
                        detail.status.to_string(),
                        detail.notes.clone().unwrap_or_default(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(closure)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                let bold = Format::new().set_bold();

                worksheet.write_string_with_format(0, 0, "MONTHLY CLOSURE", &bold)?;
                let mut row = 1;
                for (label, value) in &header {
                    worksheet.write_string_with_format(row, 0, label, &bold)?;
                    worksheet.write_string(row, 1, value)?;
                    row += 1;
                }

                row += 1;
                write_headers(worksheet, row, &CLOSURE_DETAIL_HEADERS)?;
                for detail in &closure.details {
                    row += 1;
                    worksheet.write_string(row, 0, &detail.employee_name)?;
                    worksheet.write_string(row, 1, detail.employee_email.clone().unwrap_or_default())?;
                    worksheet.write_number(row, 2, round_hours(detail.total_hours))?;
                    worksheet.write_number(row, 3, round_hours(detail.allowed_hours))?;
                    worksheet.write_number(row, 4, round_hours(detail.exceeded_hours))?;
                    worksheet.write_number(row, 5, detail.total_clockings as f64)?;
                    worksheet.write_string(row, 6, detail.status.to_string())?;
                    worksheet.write_string(row, 7, detail.notes.clone().unwrap_or_default())?;
                }

                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_clockings(&self, records: &[ClockingRecord]) -> Result<()> {
        let rows: Vec<ExportClocking> = records.iter().map(ExportClocking::from).collect();
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(CLOCKING_HEADERS)?;
                for row in &rows {
                    wtr.write_record([
                        row.id.to_string(),
                        row.employee_id.to_string(),
                        row.employee_name.clone(),
                        row.start_time.clone(),
                        row.end_time.clone().unwrap_or_default(),
                        row.duration.clone(),
                        row.status.clone(),
                        row.description.clone().unwrap_or_default(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(&rows)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                write_headers(worksheet, 0, &CLOCKING_HEADERS)?;

                for (i, row) in rows.iter().enumerate() {
                    let r = i as u32 + 1;
                    worksheet.write_number(r, 0, row.id as f64)?;
                    worksheet.write_number(r, 1, row.employee_id as f64)?;
                    worksheet.write_string(r, 2, &row.employee_name)?;
                    worksheet.write_string(r, 3, &row.start_time)?;
                    worksheet.write_string(r, 4, row.end_time.clone().unwrap_or_default())?;
                    worksheet.write_string(r, 5, &row.duration)?;
                    worksheet.write_string(r, 6, &row.status)?;
                    worksheet.write_string(r, 7, row.description.clone().unwrap_or_default())?;
                }

                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn write_headers(worksheet: &mut Worksheet, row: u32, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold().set_background_color(Color::Gray);
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(row, col as u16, *header, &header_format)?;
    }
    Ok(())
}

fn closure_header(closure: &ClosureWithDetails) -> Vec<(String, String)> {
    let c = &closure.closure;
    vec![
        ("Period".to_string(), format!("{:04}-{:02}", c.year, c.month)),
        ("Status".to_string(), c.status.to_string()),
        ("Allowed Hours".to_string(), format_hours(c.allowed_monthly_hours)),
        ("Total Hours".to_string(), format_hours(c.total_hours)),
        ("Total Exceeded Hours".to_string(), format_hours(c.total_exceeded_hours)),
        ("Employees".to_string(), c.total_employees.to_string()),
        ("Employees Exceeded".to_string(), c.employees_exceeded.to_string()),
        ("Closed At".to_string(), format_optional_timestamp(c.closed_at.as_ref())),
        ("Closed By".to_string(), c.closed_by.clone().unwrap_or_default()),
        ("Notes".to_string(), c.notes.clone().unwrap_or_default()),
    ]
}
