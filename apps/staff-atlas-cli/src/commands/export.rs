use crate::error::CliResult;
use chrono::Local;
use staff_atlas_csvs::{read_records_csv, write_records_csv};
use std::path::PathBuf;

/// Read a dataset and write it back in the canonical 11-column layout, to a
/// file named with the current date unless an explicit path is given.
pub fn execute(input: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let records = read_records_csv(&input)?;

    let output = output.unwrap_or_else(|| default_export_path(&Local::now().format("%Y-%m-%d").to_string()));
    write_records_csv(&output, &records)?;

    println!(
        "Exported {} record(s) to {}",
        records.len(),
        output.display()
    );
    Ok(())
}

fn default_export_path(date: &str) -> PathBuf {
    PathBuf::from(format!("员工数据_{}.csv", date))
}
