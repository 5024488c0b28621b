use std::io::Write;

use crate::models::FilteredRow;

/// Writes rows as CSV with the fixed display header. Absent optional
/// fields are written as empty cells.
pub fn write_csv<W: Write>(rows: &[FilteredRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(FilteredRow::COLUMNS)?;
    for row in rows {
        wtr.write_record(&[
            row.symbol.clone(),
            row.p_change.to_string(),
            row.last_price.to_string(),
            row.quantity.as_ref().map(|q| q.to_string()).unwrap_or_default(),
            row.total_turnover.to_string(),
            optional_cell(row.year_low),
            optional_cell(row.year_high),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[FilteredRow]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
