//! CSV export of the daily ledger

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::errors::ReportError;
use crate::projection::DayRecord;

/// File name offered for saved ledgers
pub const DEFAULT_CSV_NAME: &str = "trade_growth_data.csv";

/// Column headers, in ledger order
pub const CSV_HEADERS: [&str; 6] = [
    "Day",
    "Starting Principal",
    "Profit",
    "Saved (10%)",
    "Reinvested (90%)",
    "New Principal",
];

/// Write the ledger as CSV to any writer. Amounts are written with two
/// decimal places, matching the rendered table.
pub fn write_ledger<W: Write>(writer: W, records: &[DayRecord]) -> Result<(), ReportError> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.write_record([
            &record.day.to_string(),
            &format!("{:.2}", record.starting_principal),
            &format!("{:.2}", record.profit),
            &format!("{:.2}", record.saved),
            &format!("{:.2}", record.reinvested),
            &format!("{:.2}", record.new_principal),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}

/// Write the ledger to a file at `path`
pub fn export_ledger<P: AsRef<Path>>(path: P, records: &[DayRecord]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ledger(file, records)?;

    log::info!("ledger written to {}", path.display());
    Ok(())
}
