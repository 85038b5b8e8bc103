/*!
# Record Filtering

Department and free-text matching over a dataset, used by the search command
and any hosting presentation layer.

A record matches when both conditions hold:
- the department filter is unset, or equals the record's department exactly;
- the search term is unset/empty, or is a case-insensitive substring of the
  record's name, department, or position.
*/

use crate::record::PersonnelRecord;

/// Filter criteria for a dataset query.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Exact department to keep; `None` keeps every department.
    pub department: Option<String>,

    /// Case-insensitive substring matched against name, department, and
    /// position; `None` or empty keeps every record.
    pub term: Option<String>,
}

impl RecordFilter {
    /// Whether `record` passes both filter conditions.
    pub fn matches(&self, record: &PersonnelRecord) -> bool {
        let department_match = match &self.department {
            Some(department) => record.department == *department,
            None => true,
        };

        let term_match = match self.term.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                record.name.to_lowercase().contains(&term)
                    || record.department.to_lowercase().contains(&term)
                    || record.position.to_lowercase().contains(&term)
            }
            _ => true,
        };

        department_match && term_match
    }
}

/// Records passing `filter`, in dataset order.
pub fn filter_records<'a>(
    records: &'a [PersonnelRecord],
    filter: &RecordFilter,
) -> Vec<&'a PersonnelRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Sorted, deduplicated department list for a dataset.
pub fn departments(records: &[PersonnelRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.department.clone()).collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GeoPoint, RESIDENCE_LABEL, WORKPLACE_LABEL};

    fn record(name: &str, department: &str, position: &str) -> PersonnelRecord {
        PersonnelRecord {
            id: 1,
            name: name.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            residence: GeoPoint::unknown(RESIDENCE_LABEL),
            workplace: GeoPoint::unknown(WORKPLACE_LABEL),
            join_date: "2022-01-01".to_string(),
        }
    }

    fn sample_dataset() -> Vec<PersonnelRecord> {
        vec![
            record("张三", "技术部", "前端开发工程师"),
            record("李四", "市场部", "市场经理"),
            record("王五", "技术部", "后端开发工程师"),
            record("赵六", "行政部", "行政助理"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let records = sample_dataset();
        let matched = filter_records(&records, &RecordFilter::default());
        assert_eq!(matched.len(), 4);
    }

    #[test]
    fn test_department_filter_is_exact() {
        let records = sample_dataset();
        let filter = RecordFilter {
            department: Some("技术部".to_string()),
            term: None,
        };
        let matched = filter_records(&records, &filter);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|r| r.department == "技术部"));

        // A substring of a department name is not an exact match
        let filter = RecordFilter {
            department: Some("技术".to_string()),
            term: None,
        };
        assert!(filter_records(&records, &filter).is_empty());
    }

    #[test]
    fn test_term_matches_name_department_and_position() {
        let records = sample_dataset();

        let by_name = RecordFilter {
            department: None,
            term: Some("李四".to_string()),
        };
        assert_eq!(filter_records(&records, &by_name).len(), 1);

        let by_position = RecordFilter {
            department: None,
            term: Some("工程师".to_string()),
        };
        assert_eq!(filter_records(&records, &by_position).len(), 2);

        let by_department = RecordFilter {
            department: None,
            term: Some("行政".to_string()),
        };
        assert_eq!(filter_records(&records, &by_department).len(), 1);
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let records = vec![record("Alice Zhang", "Engineering", "SRE")];
        let filter = RecordFilter {
            department: None,
            term: Some("alice".to_string()),
        };
        assert_eq!(filter_records(&records, &filter).len(), 1);

        let filter = RecordFilter {
            department: None,
            term: Some("sre".to_string()),
        };
        assert_eq!(filter_records(&records, &filter).len(), 1);
    }

    #[test]
    fn test_filters_combine() {
        let records = sample_dataset();
        let filter = RecordFilter {
            department: Some("技术部".to_string()),
            term: Some("前端".to_string()),
        };
        let matched = filter_records(&records, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "张三");
    }

    #[test]
    fn test_departments_sorted_and_deduplicated() {
        let records = sample_dataset();
        let names = departments(&records);
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"技术部".to_string()));
        assert!(names.contains(&"市场部".to_string()));
        assert!(names.contains(&"行政部".to_string()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
