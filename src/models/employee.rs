//! Employee domain records
//!
//! `Employee` is the stored record, `NewEmployee` is the id-less payload that
//! create and update operations hand to the store.

use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

// == Employee ==
/// An employee record as held by the store and the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier, immutable once set
    pub id: EmployeeId,
    /// Employee name (non-empty)
    pub name: String,
    /// Salary (non-negative)
    pub salary: i64,
    /// Department name (non-empty)
    pub department: String,
}

impl Employee {
    /// Attaches an identifier to a write payload.
    pub fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            name: new.name,
            salary: new.salary,
            department: new.department,
        }
    }
}

// == New Employee ==
/// Write payload without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i64,
    pub department: String,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, salary: i64, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            department: department.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_keeps_fields() {
        let employee = Employee::from_new(7, NewEmployee::new("Jerry", 30000, "Finance"));

        assert_eq!(employee.id, 7);
        assert_eq!(employee.name, "Jerry");
        assert_eq!(employee.salary, 30000);
        assert_eq!(employee.department, "Finance");
    }

    #[test]
    fn test_employee_serialize() {
        let employee = Employee::from_new(1, NewEmployee::new("Fancy", 40000, "engineering"));
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Fancy");
        assert_eq!(json["salary"], 40000);
        assert_eq!(json["department"], "engineering");
    }
}
