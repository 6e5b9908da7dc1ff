//! Synthetic employee dataset generator.
//!
//! Produces schema-valid records drawn from fixed pools so the grid can be
//! exercised at a scale the curated sample cannot reach. Output is random per
//! call, but every record satisfies the same per-field ranges regardless of
//! the random source.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Employee;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
];

pub const POSITIONS: &[&str] = &[
    "Senior Developer",
    "Junior Developer",
    "Manager",
    "Director",
    "VP",
    "Specialist",
    "Analyst",
    "Coordinator",
    "Engineer",
    "Consultant",
];

pub const LOCATIONS: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "Austin",
    "Seattle",
    "Denver",
    "Miami",
];

/// Each draw hands out one whole bundle; skills are never mixed across bundles.
pub const SKILL_BUNDLES: &[[&str; 3]] = &[
    ["JavaScript", "React", "Node.js"],
    ["Python", "Django", "PostgreSQL"],
    ["Java", "Spring Boot", "MySQL"],
    ["AWS", "Docker", "Kubernetes"],
    ["Marketing", "SEO", "Analytics"],
    ["Sales", "CRM", "Negotiation"],
    ["HR", "Recruitment", "HRIS"],
    ["Finance", "Excel", "SAP"],
];

/// `None` is the "no manager" entry, drawn with probability 1/8.
pub const MANAGERS: &[Option<&str>] = &[
    Some("Sarah Johnson"),
    Some("Michael Brown"),
    Some("David Wilson"),
    Some("Jennifer Lee"),
    Some("Karen White"),
    Some("Thomas Clark"),
    Some("Robert Martinez"),
    None,
];

pub const SALARY_RANGE: RangeInclusive<u32> = 45_000..=200_000;
pub const AGE_RANGE: RangeInclusive<u8> = 22..=65;
pub const RATING_RANGE: RangeInclusive<f64> = 3.0..=5.0;
pub const PROJECTS_RANGE: RangeInclusive<u32> = 0..=30;
pub const ACTIVE_PROBABILITY: f64 = 0.9;
pub const EMAIL_DOMAIN: &str = "company.com";

/// Inclusive calendar window hire dates are drawn from.
pub fn hire_date_range() -> RangeInclusive<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or(NaiveDate::MIN);
    let last = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX);
    first..=last
}

/// Generates `count` employees with ids `1..=count` using the thread-local RNG.
pub fn generate(count: usize) -> Vec<Employee> {
    generate_with(&mut rand::thread_rng(), count)
}

/// Same as [`generate`] with a caller-supplied random source.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Employee> {
    let hire_dates = hire_date_range();
    let first_day = hire_dates.start().num_days_from_ce();
    let last_day = hire_dates.end().num_days_from_ce();

    let employees: Vec<Employee> = (1..=count)
        .map(|index| {
            let first_name = pick(rng, FIRST_NAMES);
            let last_name = pick(rng, LAST_NAMES);
            let hire_day = rng.gen_range(first_day..=last_day);

            Employee {
                id: index as u32,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email_for(first_name, last_name, index),
                department: pick(rng, DEPARTMENTS).to_string(),
                position: pick(rng, POSITIONS).to_string(),
                salary: rng.gen_range(SALARY_RANGE),
                hire_date: NaiveDate::from_num_days_from_ce_opt(hire_day)
                    .unwrap_or(*hire_dates.start()),
                age: rng.gen_range(AGE_RANGE),
                location: pick(rng, LOCATIONS).to_string(),
                performance_rating: round_to_tenth(rng.gen_range(RATING_RANGE)),
                projects_completed: rng.gen_range(PROJECTS_RANGE),
                is_active: rng.gen_bool(ACTIVE_PROBABILITY),
                skills: pick(rng, SKILL_BUNDLES)
                    .iter()
                    .map(|skill| skill.to_string())
                    .collect(),
                manager: pick(rng, MANAGERS).map(str::to_string),
            }
        })
        .collect();

    debug!("generated {} synthetic employees", employees.len());
    employees
}

/// The index suffix keeps addresses unique when first/last name pairs repeat.
pub fn email_for(first_name: &str, last_name: &str, index: usize) -> String {
    format!(
        "{}.{}{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        index,
        EMAIL_DOMAIN
    )
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, pool: &[T]) -> T {
    // Pools are non-empty constants.
    *pool.choose(rng).unwrap_or(&pool[0])
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
