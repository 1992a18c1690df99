//! Contract model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::duration::months_between;

/// Contract record (`GET /contracts`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whole months between start and end
    pub duration: u32,
    #[serde(rename = "salaryPerYear")]
    pub salary_per_year: f64,
}

/// Contract creation parameters (`POST /contracts?start=..&end=..`)
///
/// Unlike every other create endpoint, the backend takes these as
/// query-string parameters with an empty body. The shape is kept
/// as-is; normalizing it would break the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration: u32,
    #[serde(rename = "salaryPerYear")]
    pub salary_per_year: f64,
}

impl ContractQuery {
    /// Build from a date range; duration is derived in whole months,
    /// the way the contract form computes it.
    pub fn from_range(start: NaiveDate, end: NaiveDate, salary_per_year: f64) -> Self {
        Self {
            start,
            end,
            duration: months_between(start, end),
            salary_per_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wire_field_names() {
        let contract = Contract {
            id: 1,
            start: date(2024, 1, 1),
            end: date(2024, 7, 1),
            duration: 6,
            salary_per_year: 48000.0,
        };

        let value = serde_json::to_value(&contract).unwrap();
        assert_eq!(value["salaryPerYear"], 48000.0);
        assert_eq!(value["start"], "2024-01-01");
    }

    #[test]
    fn test_from_range_derives_whole_months() {
        let query = ContractQuery::from_range(date(2024, 1, 1), date(2024, 7, 1), 60000.0);
        assert_eq!(query.duration, 6);
    }

    #[test]
    fn test_from_range_inverted_dates() {
        let query = ContractQuery::from_range(date(2024, 7, 1), date(2024, 1, 1), 60000.0);
        assert_eq!(query.duration, 0);
    }
}
