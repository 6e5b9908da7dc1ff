use serde::Deserialize;

use crate::error::DataError;
use crate::model::Employee;

const SAMPLE_JSON: &str = include_str!("../data/sample-data.json");

#[derive(Deserialize)]
struct SampleFile {
    employees: Vec<Employee>,
}

/// Decodes the curated dataset embedded at build time.
pub fn sample_employees() -> Result<Vec<Employee>, DataError> {
    let file: SampleFile = serde_json::from_str(SAMPLE_JSON)?;
    Ok(file.employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_has_twenty_unique_records() {
        let employees = sample_employees().unwrap();
        assert_eq!(employees.len(), 20);

        let ids: HashSet<u32> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 20);
        assert!(employees.iter().all(|e| !e.skills.is_empty()));
    }

    #[test]
    fn sample_keeps_absent_managers() {
        let employees = sample_employees().unwrap();
        assert!(employees.iter().any(|e| e.manager.is_none()));
        assert_eq!(employees[0].hire_date.to_string(), "2018-03-15");
    }
}
