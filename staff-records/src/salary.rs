//! Salary statements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Amount, Record};

/// A salary statement for one employee and pay date.
///
/// `net_salary` is computed by the server; any client-side figure is only a
/// preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRecord {
    pub id: i64,
    pub employee: i64,
    /// Employee's username, filled in by the server
    #[serde(default)]
    pub employee_name: Option<String>,
    pub basic_salary: Amount,
    pub bonuses: Amount,
    pub deductions: Amount,
    pub net_salary: Amount,
    pub date: NaiveDate,
}

impl Record for SalaryRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Net pay the server will compute for the given components, or `None`
/// when the figures are too large to add up.
pub fn net_preview(basic: Amount, bonuses: Amount, deductions: Amount) -> Option<Amount> {
    basic.checked_add(bonuses)?.checked_sub(deductions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_from_backend() {
        let json = r#"{
            "id": 1,
            "employee": 4,
            "employee_name": "alice",
            "basic_salary": "3000.00",
            "bonuses": "250.50",
            "deductions": "100.00",
            "net_salary": "3150.50",
            "date": "2024-05-31"
        }"#;
        let s: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(s.net_salary.to_string(), "3150.50");
        assert_eq!(s.employee_name.as_deref(), Some("alice"));
        assert_eq!(
            net_preview(s.basic_salary, s.bonuses, s.deductions),
            Some(s.net_salary)
        );
    }

    #[test]
    fn test_preview_out_of_range_is_none() {
        let max: Amount = "92233720368547758.07".parse().unwrap();
        let cent: Amount = "0.01".parse().unwrap();
        assert_eq!(net_preview(max, cent, Amount::ZERO), None);
        assert_eq!(net_preview(Amount::ZERO, Amount::ZERO, Amount::from_cents(i64::MIN)), None);
    }
}
