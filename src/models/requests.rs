//! Request DTOs for the employee API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::employee::NewEmployee;

/// Salary as sent by clients: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    Number(i64),
    Text(String),
}

impl SalaryInput {
    fn as_i64(&self) -> Option<i64> {
        match self {
            SalaryInput::Number(n) => Some(*n),
            SalaryInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request body for POST /api/v1/employees and PUT /api/v1/employees/:id
///
/// Every field is optional at the serde level so that missing fields surface
/// as validation messages instead of a generic deserialization failure.
/// A client-supplied `id` is accepted and ignored; identity always comes from
/// the store or the request path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<SalaryInput>,
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeRequest {
    /// Validates the request and converts it into a write payload.
    ///
    /// On failure returns a map of field name to message.
    pub fn validate(self) -> Result<NewEmployee, BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();

        let name = non_blank(self.name);
        if name.is_none() {
            errors.insert("name".to_string(), "cannot be blank".to_string());
        }

        let department = non_blank(self.department);
        if department.is_none() {
            errors.insert("department".to_string(), "cannot be blank".to_string());
        }

        let salary = match self.salary.as_ref().map(SalaryInput::as_i64) {
            None => {
                errors.insert("salary".to_string(), "cannot be null".to_string());
                None
            }
            Some(None) => {
                errors.insert("salary".to_string(), "must be a number".to_string());
                None
            }
            Some(Some(n)) if n < 0 => {
                errors.insert("salary".to_string(), "must not be negative".to_string());
                None
            }
            Some(Some(n)) => Some(n),
        };

        match (name, salary, department) {
            (Some(name), Some(salary), Some(department)) if errors.is_empty() => {
                Ok(NewEmployee::new(name, salary, department))
            }
            _ => Err(errors),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialize() {
        let json = r#"{"name":"Fancy", "department":"engineering", "salary":40000}"#;
        let req: EmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name.as_deref(), Some("Fancy"));
        assert_eq!(req.salary, Some(SalaryInput::Number(40000)));
        assert!(req.id.is_none());
    }

    #[test]
    fn test_salary_as_string() {
        let json = r#"{"name":"Fancy", "department":"engineering", "salary":"50000"}"#;
        let req: EmployeeRequest = serde_json::from_str(json).unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.salary, 50000);
    }

    #[test]
    fn test_validate_valid_request() {
        let req = EmployeeRequest {
            id: Some(99),
            name: Some("Jerry".to_string()),
            salary: Some(SalaryInput::Number(0)),
            department: Some("Finance".to_string()),
        };
        let new = req.validate().unwrap();
        assert_eq!(new, NewEmployee::new("Jerry", 0, "Finance"));
    }

    #[test]
    fn test_validate_blank_name() {
        let req = EmployeeRequest {
            name: Some("  ".to_string()),
            salary: Some(SalaryInput::Number(100)),
            department: Some("Finance".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("cannot be blank"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = EmployeeRequest::default().validate().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("department"));
        assert_eq!(errors.get("salary").map(String::as_str), Some("cannot be null"));
    }

    #[test]
    fn test_validate_negative_salary() {
        let req = EmployeeRequest {
            name: Some("Jerry".to_string()),
            salary: Some(SalaryInput::Number(-1)),
            department: Some("Finance".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.contains_key("salary"));
    }

    #[test]
    fn test_validate_non_numeric_salary() {
        let req = EmployeeRequest {
            name: Some("Jerry".to_string()),
            salary: Some(SalaryInput::Text("lots".to_string())),
            department: Some("Finance".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.get("salary").map(String::as_str), Some("must be a number"));
    }
}
