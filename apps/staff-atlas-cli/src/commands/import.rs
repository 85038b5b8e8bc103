use crate::error::CliResult;
use staff_atlas_csvs::decode_records;
use staff_atlas_records::{departments, RecordStore};
use std::fs;
use std::path::PathBuf;

/// Import a dataset CSV, load it into a store, and print a summary.
pub fn execute(input: PathBuf, json_out: Option<PathBuf>) -> CliResult<()> {
    let text = fs::read_to_string(&input)?;
    let data_rows = count_data_rows(&text);

    // Decode fully before touching the store, so a malformed file leaves
    // nothing half-imported.
    let records = decode_records(&text)?;
    let skipped = data_rows.saturating_sub(records.len());

    let mut store = RecordStore::new();
    store.replace_all(records);

    println!(
        "Imported {} record(s) from {}",
        store.len(),
        input.display()
    );
    if skipped > 0 {
        println!("Skipped {} row(s) missing both name and department", skipped);
    }

    println!("Departments:");
    for department in departments(store.get_all()) {
        let count = store
            .get_all()
            .iter()
            .filter(|r| r.department == department)
            .count();
        println!("  {} ({})", department, count);
    }

    if let Some(path) = json_out {
        let json = serde_json::to_string_pretty(store.get_all())?;
        fs::write(&path, json)?;
        println!("Wrote JSON dataset: {}", path.display());
    }

    Ok(())
}

/// Non-blank lines after the header.
fn count_data_rows(text: &str) -> usize {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_data_rows_ignores_blank_lines() {
        assert_eq!(count_data_rows("h\n1\n2\n"), 2);
        assert_eq!(count_data_rows("h\n\n1\n  \n2\n\n"), 2);
        assert_eq!(count_data_rows("h\n"), 0);
        assert_eq!(count_data_rows(""), 0);
    }
}
