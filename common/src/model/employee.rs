use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the employee grid.
///
/// Field names serialize in camelCase because the grid's column declarations
/// address values by those names (`firstName`, `hireDate`, ...). `hire_date`
/// travels as an ISO-8601 `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: u32,
    pub hire_date: NaiveDate,
    pub age: u8,
    pub location: String,
    pub performance_rating: f64,
    pub projects_completed: u32,
    pub is_active: bool,
    pub skills: Vec<String>,
    /// `None` means the employee reports to nobody.
    pub manager: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
