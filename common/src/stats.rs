use std::collections::HashSet;

use crate::model::Employee;

/// Headline figures shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub departments: usize,
}

impl DashboardStats {
    pub fn from_rows(rows: &[Employee]) -> Self {
        let departments: HashSet<&str> = rows.iter().map(|e| e.department.as_str()).collect();
        Self {
            total: rows.len(),
            active: rows.iter().filter(|e| e.is_active).count(),
            departments: departments.len(),
        }
    }

    /// Percentage of active employees, 0 for an empty collection.
    pub fn active_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.active as f64 * 100.0 / self.total as f64
    }

    pub fn average_per_department(&self) -> f64 {
        if self.departments == 0 {
            return 0.0;
        }
        self.total as f64 / self.departments as f64
    }
}
