// src/employees/validators.rs

use super::models::{Employee, EmployeeField};
use crate::common::{ValidationResult, Validator};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_ERROR: &str =
    "Name is required, and should be between 3-50 characters with alphabets and spaces only.";
pub const DOB_ERROR: &str = "DOB is required and must be a past date.";
pub const CONTACT_ERROR: &str = "Contact is required and must be exactly 10 digits.";
pub const EMAIL_ERROR: &str = "Email is required and must be in a valid format.";
pub const ADDRESS_ERROR: &str = "Address is required.";
pub const DEPARTMENT_ERROR: &str = "Department is required.";
pub const DESIGNATION_ERROR: &str = "Designation is required.";
pub const SALARY_ERROR: &str = "Salary is required and must be a positive number.";

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 50;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name pattern"))
}

fn contact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("valid contact pattern"))
}

// Unanchored: "a@b.c" anywhere in the text is enough
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"))
}

// ============================================================================
// Employee Validator
// ============================================================================

/// Validates an employee against a fixed instant. The dob rule depends on
/// `now`, so the same record can pass today and fail against an earlier clock.
pub struct EmployeeValidator {
    pub now: DateTime<Utc>,
}

impl EmployeeValidator {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Validator<Employee> for EmployeeValidator {
    fn validate(&self, data: &Employee) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !is_valid_name(&data.name) {
            result.add_error(EmployeeField::Name.as_str(), NAME_ERROR);
        }

        if !is_past_date(&data.dob, self.now) {
            result.add_error(EmployeeField::Dob.as_str(), DOB_ERROR);
        }

        if !contact_pattern().is_match(&data.contact) {
            result.add_error(EmployeeField::Contact.as_str(), CONTACT_ERROR);
        }

        if data.email.is_empty() || !email_pattern().is_match(&data.email) {
            result.add_error(EmployeeField::Email.as_str(), EMAIL_ERROR);
        }

        if data.address.is_empty() {
            result.add_error(EmployeeField::Address.as_str(), ADDRESS_ERROR);
        }

        if data.department.is_empty() {
            result.add_error(EmployeeField::Department.as_str(), DEPARTMENT_ERROR);
        }

        if data.designation.is_empty() {
            result.add_error(EmployeeField::Designation.as_str(), DESIGNATION_ERROR);
        }

        match parse_salary(&data.salary) {
            Some(salary) if salary > 0.0 => {}
            _ => result.add_error(EmployeeField::Salary.as_str(), SALARY_ERROR),
        }

        result
    }
}

/// Convenience wrapper around [`EmployeeValidator`]
pub fn validate_employee(employee: &Employee, now: DateTime<Utc>) -> ValidationResult {
    EmployeeValidator::at(now).validate(employee)
}

fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) && name_pattern().is_match(name)
}

fn is_past_date(dob: &str, now: DateTime<Utc>) -> bool {
    match parse_dob(dob) {
        Some(date) => date < now,
        None => false,
    }
}

/// Date-only input is taken as UTC midnight, the way browsers read
/// `<input type="date">` values. Full RFC 3339 timestamps are also accepted.
pub fn parse_dob(dob: &str) -> Option<DateTime<Utc>> {
    if dob.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }

    DateTime::parse_from_rfc3339(dob)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Surrounding whitespace is tolerated; non-finite values are not numbers here
pub fn parse_salary(salary: &str) -> Option<f64> {
    if salary.is_empty() {
        return None;
    }
    salary
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
