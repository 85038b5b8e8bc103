use crate::error::CliResult;
use staff_atlas_csvs::read_records_csv;
use staff_atlas_records::{filter_records, RecordFilter};
use std::path::PathBuf;

/// Decode a dataset, filter it, and print the matching records.
pub fn execute(
    input: PathBuf,
    department: Option<String>,
    term: Option<String>,
) -> CliResult<()> {
    let records = read_records_csv(&input)?;

    let filter = RecordFilter { department, term };
    let matched = filter_records(&records, &filter);

    println!("{} of {} record(s) match", matched.len(), records.len());
    for record in matched {
        println!();
        println!("姓名: {}", record.name);
        println!("部门: {}", record.department);
        println!("职位: {}", record.position);
        println!("入职日期: {}", record.join_date);
        println!(
            "居住地: {} ({}, {})",
            record.residence.address, record.residence.lat, record.residence.lng
        );
        println!(
            "工作地: {} ({}, {})",
            record.workplace.address, record.workplace.lat, record.workplace.lng
        );
    }

    Ok(())
}
