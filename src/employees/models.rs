use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An employee as typed into the form. Every field is kept as the raw text
/// the user entered; nothing is trimmed or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: String,
    pub dob: String, // ISO date, e.g. "1990-01-01"
    pub contact: String,
    pub email: String,
    pub address: String,
    pub department: String,
    pub designation: String,
    pub salary: String, // numeric-as-text, e.g. "50000"
}

impl Employee {
    /// True when every field is empty, i.e. a freshly reset draft
    pub fn is_blank(&self) -> bool {
        EmployeeField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Dob => &self.dob,
            EmployeeField::Contact => &self.contact,
            EmployeeField::Email => &self.email,
            EmployeeField::Address => &self.address,
            EmployeeField::Department => &self.department,
            EmployeeField::Designation => &self.designation,
            EmployeeField::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::Name => &mut self.name,
            EmployeeField::Dob => &mut self.dob,
            EmployeeField::Contact => &mut self.contact,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Address => &mut self.address,
            EmployeeField::Department => &mut self.department,
            EmployeeField::Designation => &mut self.designation,
            EmployeeField::Salary => &mut self.salary,
        };
        *slot = value;
    }
}

/// Names of the form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Dob,
    Contact,
    Email,
    Address,
    Department,
    Designation,
    Salary,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 8] = [
        EmployeeField::Name,
        EmployeeField::Dob,
        EmployeeField::Contact,
        EmployeeField::Email,
        EmployeeField::Address,
        EmployeeField::Department,
        EmployeeField::Designation,
        EmployeeField::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Dob => "dob",
            EmployeeField::Contact => "contact",
            EmployeeField::Email => "email",
            EmployeeField::Address => "address",
            EmployeeField::Department => "department",
            EmployeeField::Designation => "designation",
            EmployeeField::Salary => "salary",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown employee field '{}'", s))
    }
}

/// An accepted record. The id is assigned on insertion; edit and delete
/// still address rows by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEmployee {
    pub id: String,
    #[serde(flatten)]
    pub employee: Employee,
}

/// Partial draft update; absent fields are left as they are
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDraftRequest {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<String>,
}

impl UpdateDraftRequest {
    pub fn into_changes(self) -> Vec<(EmployeeField, String)> {
        [
            (EmployeeField::Name, self.name),
            (EmployeeField::Dob, self.dob),
            (EmployeeField::Contact, self.contact),
            (EmployeeField::Email, self.email),
            (EmployeeField::Address, self.address),
            (EmployeeField::Department, self.department),
            (EmployeeField::Designation, self.designation),
            (EmployeeField::Salary, self.salary),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesQuery {
    pub search: Option<String>,
}

/// A row in the displayed list. `index` is the position in the full store,
/// which is what edit and delete expect even when a search filter is active.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListItem {
    pub index: usize,
    #[serde(flatten)]
    pub record: StoredEmployee,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: Employee,
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub employees: usize,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
