use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::transaction::Transaction;

/// CSV header row, in column order.
pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Serializes the transaction list to CSV.
///
/// One header row, then one record per transaction in list order. Fields
/// containing commas, quotes or line breaks are quoted by the writer.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    pub fn to_csv(&self, transactions: &[Transaction]) -> Result<String, CoreError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for t in transactions {
            wtr.write_record([
                t.date.to_string(),
                t.kind.to_string(),
                t.category.clone(),
                t.description.clone(),
                t.amount.to_string(),
            ])?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| CoreError::Csv(format!("Failed to flush CSV writer: {e}")))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Csv(format!("CSV output is not UTF-8: {e}")))
    }

    /// Default download name for an export made on `date`.
    pub fn default_file_name(&self, date: NaiveDate) -> String {
        format!("zenspend_transactions_{date}.csv")
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
