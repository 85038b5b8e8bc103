use crate::error::CliResult;
use csv::Writer;
use staff_atlas_csvs::EXPORT_HEADER;
use std::path::PathBuf;

/// Employee names seeded from the original sample dataset.
const NAMES: &[&str] = &[
    "张三", "李四", "王五", "赵六", "钱七", "孙八", "周九", "吴十", "郑一", "王二",
];

/// Departments with the positions they actually contain.
const DEPARTMENTS: &[(&str, &[&str])] = &[
    ("技术部", &["前端开发工程师", "后端开发工程师", "测试工程师"]),
    ("市场部", &["市场经理", "市场专员"]),
    ("行政部", &["行政助理"]),
    ("人事部", &["人事专员"]),
    ("财务部", &["会计"]),
];

/// Beijing addresses with real coordinates, one of them carrying an embedded
/// comma to exercise quoted-field handling downstream.
const ADDRESSES: &[(&str, f64, f64)] = &[
    ("北京市海淀区中关村南大街5号", 39.9607, 116.3413),
    ("北京市朝阳区建国路88号", 39.9087, 116.4660),
    ("北京市丰台区丰台南路12号", 39.8458, 116.2865),
    ("北京市海淀区中关村大街1号", 39.9834, 116.3074),
    ("北京市西城区西单北大街120号", 39.9114, 116.3662),
    ("北京市海淀区科学院南路2号", 39.9812, 116.3131),
    ("北京市东城区东直门外大街42号", 39.9455, 116.4482),
    ("北京市朝阳区望京街10号, 望京科技园", 39.9964, 116.4716),
];

/// Generate a deterministic sample dataset in the canonical 11-column layout.
pub fn execute(count: u64, seed: u64, output: PathBuf) -> CliResult<()> {
    println!("Generating {} record(s) with seed {}", count, seed);

    let mut writer = Writer::from_path(&output)?;
    writer.write_record(EXPORT_HEADER.split(','))?;

    let mut rng_state = seed;

    for i in 0..count {
        let name = sample_name(i as usize);

        let (department, positions) =
            DEPARTMENTS[(simple_rng(&mut rng_state) % DEPARTMENTS.len() as u64) as usize];
        let position = positions[(simple_rng(&mut rng_state) % positions.len() as u64) as usize];

        let (residence_address, residence_lat, residence_lng) =
            sample_point(&mut rng_state);
        let (workplace_address, workplace_lat, workplace_lng) =
            sample_point(&mut rng_state);

        let join_date = sample_date(&mut rng_state);

        writer.write_record(&[
            (i + 1).to_string(),
            name,
            department.to_string(),
            position.to_string(),
            residence_address.to_string(),
            format!("{:.4}", residence_lat),
            format!("{:.4}", residence_lng),
            workplace_address.to_string(),
            format!("{:.4}", workplace_lat),
            format!("{:.4}", workplace_lng),
            join_date,
        ])?;

        // Progress indicator for large datasets
        if count > 10_000 && i % 10_000 == 0 {
            println!("Generated {} / {} records", i, count);
        }
    }

    writer.flush()?;

    println!("Wrote fixtures: {}", output.display());
    Ok(())
}

fn sample_name(index: usize) -> String {
    if index < NAMES.len() {
        NAMES[index].to_string()
    } else {
        format!("员工{}", index + 1)
    }
}

/// Pick an address from the pool and jitter its coordinates slightly so
/// markers do not stack exactly.
fn sample_point(rng_state: &mut u64) -> (&'static str, f64, f64) {
    let (address, lat, lng) =
        ADDRESSES[(simple_rng(rng_state) % ADDRESSES.len() as u64) as usize];
    let lat_jitter = (simple_rng(rng_state) % 200) as f64 / 10_000.0 - 0.01;
    let lng_jitter = (simple_rng(rng_state) % 200) as f64 / 10_000.0 - 0.01;
    (address, lat + lat_jitter, lng + lng_jitter)
}

fn sample_date(rng_state: &mut u64) -> String {
    let year = 2019 + simple_rng(rng_state) % 6;
    let month = 1 + simple_rng(rng_state) % 12;
    let day = 1 + simple_rng(rng_state) % 28;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Simple deterministic RNG (Linear Congruential Generator)
fn simple_rng(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(1103515245).wrapping_add(12345);
    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use staff_atlas_csvs::read_records_csv;
    use tempfile::tempdir;

    #[test]
    fn test_simple_rng_is_deterministic() {
        let mut a = 42;
        let mut b = 42;
        for _ in 0..100 {
            assert_eq!(simple_rng(&mut a), simple_rng(&mut b));
        }
    }

    #[test]
    fn test_sample_name_falls_back_past_the_pool() {
        assert_eq!(sample_name(0), "张三");
        assert_eq!(sample_name(NAMES.len()), format!("员工{}", NAMES.len() + 1));
    }

    #[test]
    fn test_sample_date_is_well_formed() {
        let mut rng_state = 7;
        for _ in 0..50 {
            let date = sample_date(&mut rng_state);
            assert_eq!(date.len(), 10);
            let parts: Vec<&str> = date.split('-').collect();
            assert_eq!(parts.len(), 3);
            let month: u32 = parts[1].parse().unwrap();
            let day: u32 = parts[2].parse().unwrap();
            assert!((1..=12).contains(&month));
            assert!((1..=28).contains(&day));
        }
    }

    #[test]
    fn test_generated_fixtures_decode_cleanly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixtures.csv");

        execute(15, 42, path.clone()).unwrap();

        let records = read_records_csv(&path).unwrap();
        assert_eq!(records.len(), 15);
        assert_eq!(records[0].name, "张三");
        for record in &records {
            assert!(DEPARTMENTS.iter().any(|(d, _)| *d == record.department));
            assert!(!record.residence.address.is_empty());
        }
    }

    #[test]
    fn test_same_seed_generates_identical_fixtures() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");

        execute(10, 7, first.clone()).unwrap();
        execute(10, 7, second.clone()).unwrap();

        let a = std::fs::read_to_string(&first).unwrap();
        let b = std::fs::read_to_string(&second).unwrap();
        assert_eq!(a, b);
    }
}
