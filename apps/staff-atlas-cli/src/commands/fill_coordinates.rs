use crate::error::{CliError, CliResult};
use staff_atlas_geocode::GeocodeClient;
use std::path::PathBuf;
use std::time::Duration;

const HOME_LABEL: &str = "居住地";
const WORK_LABEL: &str = "工作地";

/// Column names as the canonical exporter writes them. This tool reads by
/// header name rather than by position, so it tolerates reordered or
/// extended source files.
const HOME_COLUMNS: [&str; 3] = ["居住地地址", "居住地纬度", "居住地经度"];
const WORK_COLUMNS: [&str; 3] = ["工作地地址", "工作地纬度", "工作地经度"];
const NAME_COLUMN: &str = "姓名";

#[derive(Debug, Clone, Copy)]
struct PointColumns {
    address: usize,
    lat: usize,
    lng: usize,
    label: &'static str,
}

#[derive(Debug, Default, PartialEq)]
struct FillStats {
    total_rows: usize,
    home_filled: usize,
    work_filled: usize,
    errors: usize,
}

/// Fill missing coordinates in a CSV by geocoding its address columns.
///
/// Rows whose coordinates are already present, or whose address is blank,
/// are passed through untouched. The geocode cache file is read before and
/// written after the run so repeated invocations stay cheap.
pub fn execute(
    input: PathBuf,
    output: PathBuf,
    delay_ms: u64,
    cache_file: PathBuf,
) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let delay = Duration::from_millis(delay_ms);

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&input)?;
    let headers = reader.headers()?.clone();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    let home = locate_columns(&headers, HOME_COLUMNS, HOME_LABEL)?;
    let work = locate_columns(&headers, WORK_COLUMNS, WORK_LABEL)?;
    let name_column = headers.iter().position(|h| h.trim() == NAME_COLUMN);

    let mut client = GeocodeClient::new()?;
    let loaded = client.load_cache(&cache_file)?;
    if loaded > 0 {
        println!(
            "Loaded {} cached result(s) from {}",
            loaded,
            cache_file.display()
        );
    }

    let total = rows.len();
    let mut stats = FillStats {
        total_rows: total,
        ..FillStats::default()
    };

    for (index, row) in rows.iter_mut().enumerate() {
        let who = name_column
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
            .to_string();
        let mut requested = false;

        for columns in [home, work] {
            if !needs_fill(row, &columns) {
                continue;
            }
            let address = row[columns.address].trim().to_string();

            println!("Row {} ({}): geocoding {} address", index + 1, who, columns.label);
            let cached = client.is_cached(&address);
            match runtime.block_on(client.lookup(&address)) {
                Ok(location) => {
                    row[columns.lat] = location.lat.to_string();
                    row[columns.lng] = location.lng.to_string();
                    if columns.label == HOME_LABEL {
                        stats.home_filled += 1;
                    } else {
                        stats.work_filled += 1;
                    }
                }
                Err(e) => {
                    stats.errors += 1;
                    println!("  failed: {}", e);
                }
            }
            if !cached {
                requested = true;
            }
        }

        // Rate limit between rows that actually hit the network
        if requested && index + 1 < total {
            std::thread::sleep(delay);
        }
    }

    let mut writer = csv::Writer::from_path(&output)?;
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    client.save_cache(&cache_file)?;

    println!("\nProcessed {} row(s)", stats.total_rows);
    println!("Residence coordinates filled: {}", stats.home_filled);
    println!("Workplace coordinates filled: {}", stats.work_filled);
    println!("Errors: {}", stats.errors);
    println!("Output written to {}", output.display());

    Ok(())
}

fn locate_columns(
    headers: &csv::StringRecord,
    names: [&str; 3],
    label: &'static str,
) -> CliResult<PointColumns> {
    let find = |name: &str| {
        headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
            CliError::InvalidArguments(format!("input file is missing column {}", name))
        })
    };

    Ok(PointColumns {
        address: find(names[0])?,
        lat: find(names[1])?,
        lng: find(names[2])?,
        label,
    })
}

/// A point needs filling when either coordinate is blank and the address is not.
fn needs_fill(row: &[String], columns: &PointColumns) -> bool {
    let blank = |index: usize| row.get(index).map(|f| f.trim().is_empty()).unwrap_or(true);
    (blank(columns.lat) || blank(columns.lng)) && !blank(columns.address)
}
